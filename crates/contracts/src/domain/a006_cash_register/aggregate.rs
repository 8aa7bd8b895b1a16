use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::aggregation::sum_by_category;
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
aggregate_id!(CashTransactionId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Entrada,
    Saida,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Entrada => "Entrada",
            TransactionKind::Saida => "Saída",
        }
    }

    /// Знак суммы в балансе
    pub fn sign(&self) -> f64 {
        match self {
            TransactionKind::Entrada => 1.0,
            TransactionKind::Saida => -1.0,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTransaction {
    #[serde(rename = "_id")]
    pub id: CashTransactionId,
    pub tipo: TransactionKind,
    #[serde(default)]
    pub valor: f64,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub data: String,
}

impl CashTransaction {
    pub fn signed_amount(&self) -> f64 {
        self.tipo.sign() * self.valor
    }
}

impl AggregateRoot for CashTransaction {
    type Id = CashTransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        self.descricao.clone()
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "caixa"
    }

    fn element_name() -> &'static str {
        "Transação"
    }

    fn list_name() -> &'static str {
        "Caixa"
    }
}

/// Ответ `GET /caixa`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashRegisterSummary {
    #[serde(default)]
    pub transacoes: Vec<CashTransaction>,
    #[serde(default)]
    pub saldo: Option<f64>,
}

impl CashRegisterSummary {
    fn total_of(&self, kind: TransactionKind) -> f64 {
        sum_by_category(&self.transacoes, |t| t.tipo, |t| t.valor)
            .into_iter()
            .find(|c| c.key == kind)
            .map(|c| c.total)
            .unwrap_or(0.0)
    }

    pub fn total_in(&self) -> f64 {
        self.total_of(TransactionKind::Entrada)
    }

    pub fn total_out(&self) -> f64 {
        self.total_of(TransactionKind::Saida)
    }

    /// Баланс от сервера; если его нет, считается по списку
    pub fn balance(&self) -> f64 {
        self.saldo
            .filter(|s| s.is_finite())
            .unwrap_or_else(|| self.total_in() - self.total_out())
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTransactionDto {
    pub tipo: Option<TransactionKind>,
    pub valor: Option<f64>,
    pub descricao: String,
}

impl Default for CashTransactionDto {
    fn default() -> Self {
        Self {
            tipo: Some(TransactionKind::Entrada),
            valor: None,
            descricao: String::new(),
        }
    }
}

impl CashTransactionDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.tipo.is_none() {
            errors.add("tipo", "Selecione o tipo da transação.");
        }
        errors.check(
            "valor",
            ValidationRules::required()
                .with_min(0.01)
                .with_message("O valor deve ser maior que zero.")
                .validate_number(self.valor, "Valor"),
        );
        errors.check(
            "descricao",
            ValidationRules::min_length(3)
                .with_message("A descrição deve ter no mínimo 3 caracteres.")
                .validate_string(&self.descricao, "Descrição"),
        );

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, tipo: TransactionKind, valor: f64) -> CashTransaction {
        CashTransaction {
            id: CashTransactionId::new(id),
            tipo,
            valor,
            descricao: "Mov".into(),
            data: "2025-03-10T10:00:00.000Z".into(),
        }
    }

    #[test]
    fn test_totals_and_computed_balance() {
        let summary = CashRegisterSummary {
            transacoes: vec![
                tx("1", TransactionKind::Entrada, 500.0),
                tx("2", TransactionKind::Saida, 120.5),
                tx("3", TransactionKind::Entrada, 80.0),
            ],
            saldo: None,
        };
        assert_eq!(summary.total_in(), 580.0);
        assert_eq!(summary.total_out(), 120.5);
        assert_eq!(summary.balance(), 459.5);
    }

    #[test]
    fn test_server_balance_wins() {
        let raw = r#"{"transacoes":[{"_id":"1","tipo":"saida","valor":10,"descricao":"Café","data":"2025-03-10"}],"saldo":990}"#;
        let summary: CashRegisterSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.balance(), 990.0);
        assert_eq!(summary.transacoes[0].signed_amount(), -10.0);
    }

    #[test]
    fn test_empty_register() {
        let summary = CashRegisterSummary::default();
        assert_eq!(summary.balance(), 0.0);
        assert_eq!(summary.total_out(), 0.0);
    }

    #[test]
    fn test_dto_validation() {
        let dto = CashTransactionDto {
            tipo: None,
            valor: Some(0.0),
            descricao: "ab".into(),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("valor"), Some("O valor deve ser maior que zero."));
        assert_eq!(
            errors.get("descricao"),
            Some("A descrição deve ter no mínimo 3 caracteres.")
        );
        assert!(errors.get("tipo").is_some());

        let ok = CashTransactionDto {
            valor: Some(0.01),
            descricao: "Troco".into(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["tipo"], "entrada");
    }
}
