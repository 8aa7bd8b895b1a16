use serde::{Deserialize, Deserializer};

/// Принимает строку или число и возвращает строку.
///
/// Номер ордера (`numeroOS`) сервер присылает то числом, то строкой.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => Some(s),
        Some(Raw::Int(n)) => Some(n.to_string()),
        Some(Raw::Float(n)) => Some(n.to_string()),
        None => None,
    })
}

/// Дата из ISO-строки (`2025-01-15` или `2025-01-15T12:00:00.000Z`)
pub fn parse_iso_date(value: &str) -> Option<chrono::NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "string_or_number")]
        value: Option<String>,
    }

    #[test]
    fn test_string_or_number() {
        let h: Holder = serde_json::from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(h.value.as_deref(), Some("42"));
        let h: Holder = serde_json::from_str(r#"{"value": "OS-7"}"#).unwrap();
        assert_eq!(h.value.as_deref(), Some("OS-7"));
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.value, None);
        let h: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(h.value, None);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2025-01-15T12:00:00.000Z"),
            chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
        );
        assert_eq!(parse_iso_date("2025-02-30"), None);
        assert_eq!(parse_iso_date(""), None);
    }
}
