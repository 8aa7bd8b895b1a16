/// Utilities for date and time formatting
///
/// Все даты в интерфейсе выводятся в формате pt-BR (DD/MM/YYYY).
use chrono::{Local, NaiveDate};

/// Сегодняшняя дата в часовом поясе браузера
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Сегодня в формате `<input type="date">`
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Как `format_date`, но пустое или отсутствующее значение даёт "--"
pub fn format_date_opt(date_str: Option<&str>) -> String {
    match date_str.map(str::trim) {
        Some(s) if !s.is_empty() => format_date(s),
        _ => "--".to_string(),
    }
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time: String = time_part.chars().take(5).collect();
        return format!("{} {}", format_date(date_part), time);
    }
    format_date(datetime_str)
}

pub fn format_naive(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn test_invalid_and_missing() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date_opt(None), "--");
        assert_eq!(format_date_opt(Some(" ")), "--");
        assert_eq!(
            format_naive(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()),
            "05/01/2025"
        );
    }
}
