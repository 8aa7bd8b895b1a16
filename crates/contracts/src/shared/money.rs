//! Форматирование и разбор денежных значений в формате pt-BR (`R$ 1.234,56`)

/// Префикс валюты: символ реала и неразрывный пробел, как у `Intl.NumberFormat('pt-BR')`
pub const CURRENCY_PREFIX: &str = "R$\u{a0}";

/// Отображение нулевой суммы. Используется и для отсутствующих/некорректных значений.
pub const ZERO_DISPLAY: &str = "R$\u{a0}0,00";

/// Вставляет разделитель тысяч каждые 3 цифры с конца
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Форматирует число с разделителем тысяч `.` и десятичной запятой
///
/// # Примеры
///
/// ```
/// use contracts::shared::money::format_decimal;
/// assert_eq!(format_decimal(1234.567, 2), "1.234,57");
/// assert_eq!(format_decimal(-1234.0, 0), "-1.234");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format_decimal(0.0, decimals);
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, group_thousands(integer_part, '.'), d),
        None => format!("{}{}", sign, group_thousands(integer_part, '.')),
    }
}

/// Форматирует целое число с разделителем тысяч (`1.234`)
pub fn format_integer(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string(), '.');
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Форматирует сумму как валюту BRL.
///
/// Отсутствующее значение, NaN и бесконечности дают [`ZERO_DISPLAY`].
///
/// ```
/// use contracts::shared::money::format_currency;
/// assert_eq!(format_currency(Some(1234.56)), "R$\u{a0}1.234,56");
/// assert_eq!(format_currency(None), "R$\u{a0}0,00");
/// ```
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let body = format_decimal(v, 2);
            match body.strip_prefix('-') {
                Some(positive) => format!("-{}{}", CURRENCY_PREFIX, positive),
                None => format!("{}{}", CURRENCY_PREFIX, body),
            }
        }
        _ => ZERO_DISPLAY.to_string(),
    }
}

/// Сокращение для значений, которые всегда присутствуют
pub fn format_brl(value: f64) -> String {
    format_currency(Some(value))
}

/// Целое с точками-разделителями тысяч: `1.500`, `-12.345.678`.
///
/// Первая группа 1-3 цифры без ведущего нуля, остальные ровно по 3.
fn is_grouped_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut groups = digits.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let head_ok = (1..=3).contains(&head.len())
        && !head.starts_with('0')
        && head.chars().all(|c| c.is_ascii_digit());
    let mut tail_count = 0;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        tail_count += 1;
    }
    head_ok && tail_count > 0
}

/// Разбирает локализованную денежную строку обратно в число.
///
/// Понимает `R$ 1.234,56`, `1.234,56`, `1234,56`, `1.500` (тысячи) и
/// `1234.56` (значение `<input type="number">`). Пустая строка или мусор
/// дают `None`.
pub fn parse_currency(text: &str) -> Option<f64> {
    let cleaned: String = text
        .replace("R$", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        // pt-BR: точка разделяет тысячи, запятая отделяет дробную часть
        cleaned.replace('.', "").replace(',', ".")
    } else if is_grouped_integer(&cleaned) {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(1234.56)), "R$\u{a0}1.234,56");
        assert_eq!(format_currency(Some(1234567.891)), "R$\u{a0}1.234.567,89");
        assert_eq!(format_currency(Some(200.0)), "R$\u{a0}200,00");
        assert_eq!(format_currency(Some(0.5)), "R$\u{a0}0,50");
        assert_eq!(format_currency(Some(-1234.56)), "-R$\u{a0}1.234,56");
    }

    #[test]
    fn test_zero_display_for_missing_values() {
        assert_eq!(format_currency(Some(0.0)), ZERO_DISPLAY);
        assert_eq!(format_currency(None), ZERO_DISPLAY);
        assert_eq!(format_currency(Some(f64::NAN)), ZERO_DISPLAY);
        assert_eq!(format_currency(Some(f64::INFINITY)), ZERO_DISPLAY);
        assert_eq!(format_currency(Some(-0.001)), ZERO_DISPLAY);
    }

    #[test]
    fn test_format_decimal_and_integer() {
        assert_eq!(format_decimal(1234.567, 0), "1.235");
        assert_eq!(format_decimal(1234.567, 1), "1.234,6");
        assert_eq!(format_decimal(999.0, 2), "999,00");
        assert_eq!(format_integer(1234567), "1.234.567");
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(-1234), "-1.234");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("R$\u{a0}1.234,56"), Some(1234.56));
        assert_eq!(parse_currency("R$ 1.234,56"), Some(1234.56));
        assert_eq!(parse_currency("1234,5"), Some(1234.5));
        assert_eq!(parse_currency("1234.5"), Some(1234.5));
        assert_eq!(parse_currency("1.234.567"), Some(1234567.0));
        assert_eq!(parse_currency("-R$\u{a0}10,00"), Some(-10.0));
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("abc"), None);
    }

    #[test]
    fn test_parse_thousands_without_decimals() {
        assert_eq!(parse_currency("1.500"), Some(1500.0));
        assert_eq!(parse_currency("R$ 12.000"), Some(12000.0));
        assert_eq!(parse_currency("-1.234"), Some(-1234.0));
        assert_eq!(parse_currency("0.125"), Some(0.125));
        assert_eq!(parse_currency("1.5"), Some(1.5));
        assert_eq!(parse_currency("1.2345"), Some(1.2345));
        assert_eq!(parse_currency("1.234.5"), None);
    }

    #[test]
    fn test_format_then_parse() {
        for value in [0.01, 1.0, 200.0, 1234.56, 98765432.1] {
            assert_eq!(parse_currency(&format_brl(value)), Some(value));
        }
    }
}
