use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Сервер хранит записи в MongoDB, поэтому идентификатор приходит строкой
/// в поле `_id` (24 hex-символа ObjectId).
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Объявляет newtype-идентификатор поверх строкового `_id`.
macro_rules! aggregate_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.clone()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(format!("Invalid {}: empty", stringify!($name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use aggregate_id;

#[cfg(test)]
mod tests {
    use super::*;

    aggregate_id!(SampleId);

    #[test]
    fn test_from_string_trims_and_rejects_empty() {
        let id = SampleId::from_string(" 64b7f0c2a1 ").unwrap();
        assert_eq!(id.value(), "64b7f0c2a1");
        assert!(SampleId::from_string("   ").is_err());
    }

    #[test]
    fn test_id_is_transparent_on_the_wire() {
        let id = SampleId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        assert_eq!(id.as_string(), "abc");
    }
}
