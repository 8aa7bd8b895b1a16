use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::serde_helpers::parse_iso_date;
use crate::shared::validation::{FieldErrors, ValidationRules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
aggregate_id!(AppointmentId);

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AppointmentStatus {
    #[default]
    Aberto,
    Compareceu,
    Faltou,
    Cancelado,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Aberto,
        AppointmentStatus::Compareceu,
        AppointmentStatus::Faltou,
        AppointmentStatus::Cancelado,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Aberto => "Aberto",
            AppointmentStatus::Compareceu => "Compareceu",
            AppointmentStatus::Faltou => "Faltou",
            AppointmentStatus::Cancelado => "Cancelado",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: AppointmentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// Ключ сортировки: дата, затем время
    pub fn sort_key(&self) -> (Option<NaiveDate>, String) {
        (self.day(), self.hour.clone())
    }
}

impl AggregateRoot for Appointment {
    type Id = AppointmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        format!("{} {}", self.name, self.hour)
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "agendamentos"
    }

    fn element_name() -> &'static str {
        "Agendamento"
    }

    fn list_name() -> &'static str {
        "Agendamentos"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// `HH:MM`, часы 0..=23 (допускается одна цифра), минуты 00..=59
pub fn is_valid_hour(value: &str) -> bool {
    let Some((h, m)) = value.split_once(':') else {
        return false;
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !(1..=2).contains(&h.len()) || m.len() != 2 || !all_digits(h) || !all_digits(m) {
        return false;
    }
    matches!((h.parse::<u32>(), m.parse::<u32>()), (Ok(h), Ok(m)) if h <= 23 && m <= 59)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub telephone: String,
    pub date: String,
    pub hour: String,
    pub observation: String,
    pub status: AppointmentStatus,
}

impl AppointmentDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(
            "name",
            ValidationRules::min_length(3)
                .with_message("O nome deve ter no mínimo 3 caracteres.")
                .validate_string(&self.name, "Nome"),
        );
        errors.check(
            "telephone",
            ValidationRules::min_length(10)
                .with_message("O telefone deve ter no mínimo 10 caracteres.")
                .validate_string(&self.telephone, "Telefone"),
        );
        if parse_iso_date(&self.date).is_none() {
            errors.add("date", "Data inválida.");
        }
        if !is_valid_hour(self.hour.trim()) {
            errors.add("hour", "Formato de hora inválido (HH:MM).");
        }

        errors.into_result()
    }
}

impl From<Appointment> for AppointmentDto {
    fn from(a: Appointment) -> Self {
        Self {
            id: Some(a.id.0),
            name: a.name,
            telephone: a.telephone,
            date: a.date.split('T').next().unwrap_or_default().to_string(),
            hour: a.hour,
            observation: a.observation,
            status: a.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> AppointmentDto {
        AppointmentDto {
            id: None,
            name: "Carlos".into(),
            telephone: "(11) 98765-4321".into(),
            date: "2025-05-20".into(),
            hour: "14:30".into(),
            observation: String::new(),
            status: AppointmentStatus::Aberto,
        }
    }

    #[test]
    fn test_hour_format() {
        for ok in ["0:00", "09:05", "9:59", "23:59", "19:00"] {
            assert!(is_valid_hour(ok), "{}", ok);
        }
        for bad in ["24:00", "12:60", "1230", "12:5", "ab:cd", "", "123:00", ":30"] {
            assert!(!is_valid_hour(bad), "{}", bad);
        }
    }

    #[test]
    fn test_valid_dto() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_invalid_dto() {
        let d = AppointmentDto {
            name: "Al".into(),
            telephone: "123".into(),
            date: "amanhã".into(),
            hour: "25:00".into(),
            ..dto()
        };
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("hour"), Some("Formato de hora inválido (HH:MM)."));
    }

    #[test]
    fn test_payload_has_no_id() {
        let mut d = dto();
        d.id = Some("x".into());
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["status"], "Aberto");
    }

    #[test]
    fn test_from_api() {
        let raw = r#"{"_id":"a1","name":"Carlos","telephone":"11987654321","date":"2025-05-20T00:00:00.000Z","hour":"14:30","status":"Compareceu"}"#;
        let a: Appointment = serde_json::from_str(raw).unwrap();
        assert_eq!(a.status, AppointmentStatus::Compareceu);
        assert_eq!(a.day(), NaiveDate::from_ymd_opt(2025, 5, 20));
        let d = AppointmentDto::from(a);
        assert_eq!(d.date, "2025-05-20");
        assert_eq!(d.id.as_deref(), Some("a1"));
    }
}
