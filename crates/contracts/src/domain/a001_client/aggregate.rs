use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::masks::{digits_only, format_cep, format_cpf, format_phone};
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
aggregate_id!(ClientId);

// ============================================================================
// Receita (рецепт на очки)
// ============================================================================
/// Данные рецепта. Значения хранятся строками, как их вводит оптик ("-1,25").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(rename = "esfericoDireito", default)]
    pub esferico_direito: Option<String>,
    #[serde(rename = "cilindricoDireito", default)]
    pub cilindrico_direito: Option<String>,
    #[serde(rename = "eixoDireito", default)]
    pub eixo_direito: Option<String>,
    #[serde(rename = "esfericoEsquerdo", default)]
    pub esferico_esquerdo: Option<String>,
    #[serde(rename = "cilindricoEsquerdo", default)]
    pub cilindrico_esquerdo: Option<String>,
    #[serde(rename = "eixoEsquerdo", default)]
    pub eixo_esquerdo: Option<String>,
    #[serde(default)]
    pub adicao: Option<String>,
    #[serde(rename = "vencimentoReceita", default)]
    pub vencimento_receita: Option<String>,
}

impl Prescription {
    pub fn is_empty(&self) -> bool {
        [
            &self.esferico_direito,
            &self.cilindrico_direito,
            &self.eixo_direito,
            &self.esferico_esquerdo,
            &self.cilindrico_esquerdo,
            &self.eixo_esquerdo,
            &self.adicao,
        ]
        .iter()
        .all(|v| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: ClientId,

    #[serde(rename = "fullName")]
    pub full_name: String,

    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(flatten)]
    pub prescription: Prescription,
}

impl Client {
    /// Поиск по имени, CPF или телефону (без учёта регистра и маски)
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        if self.full_name.to_lowercase().contains(&term) {
            return true;
        }
        let term_digits = digits_only(&term);
        !term_digits.is_empty()
            && (digits_only(&self.cpf).contains(&term_digits)
                || digits_only(&self.phone).contains(&term_digits))
    }

    pub fn to_ref(&self) -> ClientRef {
        ClientRef {
            id: Some(self.id.clone()),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
        }
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        self.full_name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "clientes"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

/// Клиент, встроенный в другие документы после `populate` на сервере
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientId>,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientDto {
    #[serde(skip)]
    pub id: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub cpf: String,
    pub phone: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub gender: String,
    pub address: String,
    pub cep: String,
    pub notes: String,
    #[serde(flatten)]
    pub prescription: Prescription,
}

impl ClientDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "fullName",
            ValidationRules::min_length(3)
                .with_message("O nome é obrigatório.")
                .validate_string(&self.full_name, "Nome"),
        );
        errors.check(
            "cpf",
            ValidationRules::min_length(14)
                .with_message("CPF inválido.")
                .validate_string(&format_cpf(&self.cpf), "CPF"),
        );
        errors.check(
            "phone",
            ValidationRules::min_length(10)
                .with_message("Telefone inválido.")
                .validate_string(&self.phone, "Telefone"),
        );
        errors.into_result()
    }

    /// Применяет маски к полям документов
    pub fn normalized(mut self) -> Self {
        self.cpf = format_cpf(&self.cpf);
        self.phone = format_phone(&self.phone);
        self.cep = format_cep(&self.cep);
        self
    }
}

impl From<Client> for ClientDto {
    fn from(c: Client) -> Self {
        Self {
            id: Some(c.id.0),
            full_name: c.full_name,
            cpf: c.cpf,
            phone: c.phone,
            birth_date: c
                .birth_date
                .map(|d| d.split('T').next().unwrap_or_default().to_string())
                .unwrap_or_default(),
            gender: c.gender.unwrap_or_default(),
            address: c.address.unwrap_or_default(),
            cep: c.cep.unwrap_or_default(),
            notes: c.notes.unwrap_or_default(),
            prescription: c.prescription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ClientDto {
        ClientDto {
            full_name: "Maria da Silva".into(),
            cpf: "12345678901".into(),
            phone: "(11) 98765-4321".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_client_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_field_messages() {
        let dto = ClientDto {
            full_name: "Jo".into(),
            cpf: "123.456".into(),
            phone: "1199".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("fullName"), Some("O nome é obrigatório."));
        assert_eq!(errors.get("cpf"), Some("CPF inválido."));
        assert_eq!(errors.get("phone"), Some("Telefone inválido."));
    }

    #[test]
    fn test_client_wire_format_with_prescription() {
        let raw = r#"{
            "_id": "64b7f0c2a1",
            "fullName": "Maria da Silva",
            "cpf": "123.456.789-01",
            "phone": "(11) 98765-4321",
            "esfericoDireito": "-1,25",
            "adicao": "+2,00",
            "createdAt": "2024-05-20T10:00:00.000Z"
        }"#;
        let client: Client = serde_json::from_str(raw).unwrap();
        assert_eq!(client.id.value(), "64b7f0c2a1");
        assert_eq!(client.prescription.esferico_direito.as_deref(), Some("-1,25"));
        assert!(!client.prescription.is_empty());
        assert_eq!(Client::item_path(&client.id), "/clientes/64b7f0c2a1");
    }

    #[test]
    fn test_matches_name_cpf_or_phone() {
        let client: Client = serde_json::from_str(
            r#"{"_id":"1","fullName":"Maria da Silva","cpf":"123.456.789-01","phone":"(11) 98765-4321"}"#,
        )
        .unwrap();
        assert!(client.matches("maria"));
        assert!(client.matches("456.789"));
        assert!(client.matches("98765"));
        assert!(!client.matches("joão"));
        assert!(client.matches("  "));
    }

    #[test]
    fn test_dto_serializes_without_id() {
        let mut dto = valid_dto();
        dto.id = Some("abc".into());
        let json = serde_json::to_value(dto.normalized()).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["cpf"], "123.456.789-01");
    }
}
