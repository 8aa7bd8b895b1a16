//! Правила валидации полей форм и сборщик ошибок по полям.
//!
//! Сообщения показываются пользователю как есть, поэтому они на португальском.

use std::collections::BTreeMap;
use std::fmt;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub integer: bool,
    /// Сообщение, заменяющее стандартное при любом нарушении
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            integer: false,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required string with a minimum number of characters
    pub const fn min_length(min: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min),
            ..Self::none()
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    pub const fn integer(self) -> Self {
        Self {
            integer: true,
            ..self
        }
    }

    pub const fn with_message(self, message: &'static str) -> Self {
        Self {
            custom_error: Some(message),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    fn fail(&self, default: String) -> Result<(), String> {
        Err(self.custom_error.map(str::to_string).unwrap_or(default))
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let length = value.trim().chars().count();

        if self.required && length == 0 {
            return self.fail(format!("{} é obrigatório.", field_label));
        }

        if let Some(min) = self.min_length {
            if length < min {
                return self.fail(format!(
                    "{} deve ter no mínimo {} caracteres.",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return self.fail(format!(
                    "{} deve ter no máximo {} caracteres.",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    ///
    /// `None` означает пустое или нечисловое поле ввода.
    pub fn validate_number(&self, value: Option<f64>, field_label: &str) -> Result<(), String> {
        let value = match value {
            Some(v) if v.is_finite() => v,
            _ if self.required => return self.fail(format!("{} é obrigatório.", field_label)),
            _ => return Ok(()),
        };

        if self.integer && value.fract() != 0.0 {
            return self.fail(format!("{} deve ser um número inteiro.", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return self.fail(format!("{} deve ser no mínimo {}.", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return self.fail(format!("{} deve ser no máximo {}.", field_label, max));
            }
        }

        Ok(())
    }
}

/// Ошибки валидации формы, сгруппированные по имени поля.
///
/// Для каждого поля хранится только первое сообщение.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Записать результат проверки поля
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_uses_custom_message() {
        let rules = ValidationRules::min_length(3).with_message("O nome é obrigatório.");
        assert_eq!(
            rules.validate_string("Al", "Nome"),
            Err("O nome é obrigatório.".to_string())
        );
        assert!(rules.validate_string("Ana", "Nome").is_ok());
    }

    #[test]
    fn test_required_string_rejects_whitespace() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Código"),
            Err("Código é obrigatório.".to_string())
        );
    }

    #[test]
    fn test_number_rules() {
        let price = ValidationRules::required().with_min(0.0);
        assert!(price.validate_number(Some(0.0), "Preço").is_ok());
        assert!(price.validate_number(Some(-1.0), "Preço").is_err());
        assert_eq!(
            price.validate_number(None, "Preço"),
            Err("Preço é obrigatório.".to_string())
        );
        assert!(price.validate_number(Some(f64::NAN), "Preço").is_err());

        let stock = ValidationRules::required().integer();
        assert!(stock.validate_number(Some(4.0), "Estoque").is_ok());
        assert_eq!(
            stock.validate_number(Some(4.5), "Estoque"),
            Err("Estoque deve ser um número inteiro.".to_string())
        );

        let optional = ValidationRules::none().with_max(10.0);
        assert!(optional.validate_number(None, "Qtd").is_ok());
        assert!(optional.validate_number(Some(11.0), "Qtd").is_err());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("cpf", "CPF inválido.");
        errors.add("cpf", "outra mensagem");
        errors.check("phone", Ok(()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("cpf"), Some("CPF inválido."));
        assert!(errors.clone().into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
