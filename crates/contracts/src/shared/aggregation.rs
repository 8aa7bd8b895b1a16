//! Клиентские свёртки для дашбордов и итоговых строк таблиц

/// Итог по одной категории
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal<K> {
    pub key: K,
    pub total: f64,
    pub count: usize,
}

/// Суммирует значения по категориям.
///
/// Порядок категорий совпадает с порядком их первого появления.
pub fn sum_by_category<T, K, FK, FA>(
    items: impl IntoIterator<Item = T>,
    key: FK,
    amount: FA,
) -> Vec<CategoryTotal<K>>
where
    K: PartialEq,
    FK: Fn(&T) -> K,
    FA: Fn(&T) -> f64,
{
    let mut totals: Vec<CategoryTotal<K>> = Vec::new();
    for item in items {
        let k = key(&item);
        let value = amount(&item);
        let value = if value.is_finite() { value } else { 0.0 };
        match totals.iter_mut().find(|t| t.key == k) {
            Some(entry) => {
                entry.total += value;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                key: k,
                total: value,
                count: 1,
            }),
        }
    }
    totals
}

/// Доля `part` от `whole` в процентах; 0 для пустого целого
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

/// Ширина столбиков диаграммы в процентах от максимального значения
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| if v.is_finite() { percent(v.max(0.0), max) } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_by_category_keeps_first_seen_order() {
        let orders = vec![("PIX", 100.0), ("Dinheiro", 50.0), ("PIX", 25.5), ("Boleto", 10.0)];
        let totals = sum_by_category(orders, |o| o.0, |o| o.1);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].key, "PIX");
        assert_eq!(totals[0].total, 125.5);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].key, "Dinheiro");
        assert_eq!(totals[2].key, "Boleto");
    }

    #[test]
    fn test_percent_and_bars() {
        assert_eq!(percent(3.0, 4.0), 75.0);
        assert_eq!(percent(1.0, 0.0), 0.0);
        assert_eq!(bar_widths(&[50.0, 100.0, 0.0]), vec![50.0, 100.0, 0.0]);
        assert_eq!(bar_widths(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(bar_widths(&[]).is_empty());
    }
}
