//! Property-based tests for the pure money and installment helpers

use super::installments::{add_months, generate_installments};
use super::money::{format_brl, format_currency, format_integer, parse_currency, ZERO_DISPLAY};
use chrono::NaiveDate;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=31).prop_filter_map("valid date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

proptest! {
    #[test]
    fn test_length_and_sum_match(
        down_cents in 0u64..1_000_000,
        extra_cents in 1u64..10_000_000,
        count in 1i64..=120,
        first in any_date(),
    ) {
        let down = down_cents as f64 / 100.0;
        let total = down + extra_cents as f64 / 100.0;
        let plan = generate_installments(total, down, count, Some(first));

        prop_assert_eq!(plan.len() as i64, count);
        let sum: f64 = plan.iter().map(|p| p.amount).sum();
        let expected = total - down;
        prop_assert!((sum - expected).abs() <= 1e-6 * expected.max(1.0));
    }

    #[test]
    fn test_due_dates_advance_by_months(count in 1i64..=48, first in any_date()) {
        let plan = generate_installments(1000.0, 0.0, count, Some(first));
        for (i, p) in plan.iter().enumerate() {
            prop_assert_eq!(Some(p.due_date), add_months(first, i as u32));
        }
    }

    #[test]
    fn test_no_remainder_to_split(total_cents in 0u64..1_000_000, count in 0i64..24) {
        let total = total_cents as f64 / 100.0;
        let first = NaiveDate::from_ymd_opt(2025, 1, 15);
        prop_assert!(generate_installments(total, total, count, first).is_empty());
        prop_assert!(generate_installments(total + 1.0, 0.0, 0, first).is_empty());
    }

    #[test]
    fn test_currency_round_trip(cents in 1u64..100_000_000_000) {
        let value = cents as f64 / 100.0;
        prop_assert_eq!(parse_currency(&format_brl(value)), Some(value));
    }

    #[test]
    fn test_grouped_integer_round_trip(n in -1_000_000_000_000i64..1_000_000_000_000) {
        prop_assert_eq!(parse_currency(&format_integer(n)), Some(n as f64));
    }

    #[test]
    fn test_non_finite_is_zero(value in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]) {
        prop_assert_eq!(format_currency(Some(value)), ZERO_DISPLAY);
    }
}
