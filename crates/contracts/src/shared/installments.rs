//! Генерация графика рассрочки (parcelas)
//!
//! График пересчитывается целиком при каждом изменении полей формы и нигде
//! не сохраняется: настоящие записи создаёт сервер при отправке формы.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Один платёж графика
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// Номер платежа, начиная с 1
    pub number: u32,
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// Сумма одного платежа для поля "Valor por Parcela".
///
/// Без остатка: все платежи одинаковые. При `count <= 0` возвращает 0.
pub fn installment_amount(total: f64, down_payment: f64, count: i64) -> f64 {
    if count <= 0 {
        return 0.0;
    }
    (total - down_payment) / count as f64
}

/// Дата `first` плюс `months` календарных месяцев.
///
/// Если такого дня в целевом месяце нет, берётся последний день месяца
/// (31.01 + 1 месяц = 28/29.02). Отсчёт всегда идёт от первой даты, поэтому
/// обрезка не накапливается: 31.01 → 28.02 → 31.03.
pub fn add_months(first: NaiveDate, months: u32) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(months))
}

/// Строит график платежей.
///
/// Пустой результат (без ошибки), если `count <= 0`, `total <= down_payment`,
/// дата первого платежа не задана, суммы не конечны или последняя дата
/// не представима.
pub fn generate_installments(
    total: f64,
    down_payment: f64,
    count: i64,
    first_due_date: Option<NaiveDate>,
) -> Vec<Installment> {
    let Some(first) = first_due_date else {
        return Vec::new();
    };
    if count <= 0 || !total.is_finite() || !down_payment.is_finite() || total <= down_payment {
        return Vec::new();
    }
    let Ok(count) = u32::try_from(count) else {
        return Vec::new();
    };

    let amount = installment_amount(total, down_payment, i64::from(count));

    // График либо полный, либо пустой: дата вне диапазона chrono обнуляет всё
    (0..count)
        .map(|i| {
            add_months(first, i).map(|due_date| Installment {
                number: i + 1,
                amount,
                due_date,
            })
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_four_installments_of_two_hundred() {
        let plan = generate_installments(1000.0, 200.0, 4, Some(date(2025, 1, 15)));

        assert_eq!(plan.len(), 4);
        assert!(plan.iter().all(|p| p.amount == 200.0));
        let dates: Vec<NaiveDate> = plan.iter().map(|p| p.due_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 1, 15),
                date(2025, 2, 15),
                date(2025, 3, 15),
                date(2025, 4, 15)
            ]
        );
        assert_eq!(plan[0].number, 1);
        assert_eq!(plan[3].number, 4);
    }

    #[test]
    fn test_down_payment_equal_to_total_gives_nothing() {
        assert!(generate_installments(100.0, 100.0, 3, Some(date(2025, 1, 15))).is_empty());
        assert!(generate_installments(100.0, 150.0, 3, Some(date(2025, 1, 15))).is_empty());
    }

    #[test]
    fn test_invalid_count_or_missing_date_gives_nothing() {
        assert!(generate_installments(1000.0, 0.0, 0, Some(date(2025, 1, 15))).is_empty());
        assert!(generate_installments(1000.0, 0.0, -2, Some(date(2025, 1, 15))).is_empty());
        assert!(generate_installments(1000.0, 0.0, 3, None).is_empty());
        assert!(generate_installments(f64::NAN, 0.0, 3, Some(date(2025, 1, 15))).is_empty());
    }

    #[test]
    fn test_end_of_month_is_clamped_without_drift() {
        let plan = generate_installments(400.0, 0.0, 4, Some(date(2024, 1, 31)));
        let dates: Vec<NaiveDate> = plan.iter().map(|p| p.due_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 31),
                date(2024, 2, 29),
                date(2024, 3, 31),
                date(2024, 4, 30)
            ]
        );

        assert_eq!(add_months(date(2025, 1, 31), 1), Some(date(2025, 2, 28)));
        assert_eq!(add_months(date(2025, 11, 30), 3), Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_installment_amount() {
        assert_eq!(installment_amount(1000.0, 200.0, 4), 200.0);
        assert_eq!(installment_amount(1000.0, 200.0, 0), 0.0);
        assert!((installment_amount(100.0, 0.0, 3) - 33.333333).abs() < 1e-5);
    }

    #[test]
    fn test_unrepresentable_dates_give_empty_plan() {
        use chrono::Datelike;

        let near_end = NaiveDate::MAX.with_day(1).unwrap();
        assert!(generate_installments(1000.0, 0.0, 3, Some(near_end)).is_empty());
        assert_eq!(generate_installments(1000.0, 0.0, 1, Some(near_end)).len(), 1);
    }
}
