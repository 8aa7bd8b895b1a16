use crate::shared::http::ApiClient;
use contracts::domain::a006_cash_register::{CashTransaction, CashTransactionDto, TransactionKind};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::money::parse_currency;

/// Поля формы как введённый текст
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub tipo: Option<TransactionKind>,
    pub valor: String,
    pub descricao: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        let dto = CashTransactionDto::default();
        Self {
            tipo: dto.tipo,
            valor: String::new(),
            descricao: dto.descricao,
        }
    }
}

impl TransactionForm {
    pub fn to_dto(&self) -> CashTransactionDto {
        CashTransactionDto {
            tipo: self.tipo,
            valor: parse_currency(&self.valor),
            descricao: self.descricao.trim().to_string(),
        }
    }
}

pub async fn create_transaction(api: &ApiClient, dto: &CashTransactionDto) -> Result<(), ApiError> {
    api.post_unit(&CashTransaction::api_path(), dto).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_to_dto() {
        let form = TransactionForm {
            tipo: Some(TransactionKind::Saida),
            valor: "R$ 45,90".into(),
            descricao: " Material de limpeza ".into(),
        };
        let dto = form.to_dto();
        assert_eq!(dto.valor, Some(45.9));
        assert_eq!(dto.descricao, "Material de limpeza");
        assert!(dto.validate().is_ok());

        let empty = TransactionForm::default().to_dto();
        let errors = empty.validate().unwrap_err();
        assert!(errors.get("valor").is_some());
        assert!(errors.get("descricao").is_some());
    }
}
