//! Форма "Novo Parcelamento"
//!
//! Поля формы хранятся как введённый текст. Предпросмотр графика
//! пересчитывается из них при каждом изменении.

use crate::domain::a001_client::ClientRef;
use crate::shared::installments::{generate_installments, installment_amount, Installment};
use crate::shared::money::parse_currency;
use crate::shared::serde_helpers::parse_iso_date;
use crate::shared::validation::FieldErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Больше платежей форма не принимает (30 лет помесячно)
pub const MAX_INSTALLMENTS: i64 = 360;

#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentPlanDraft {
    pub cliente: Option<ClientRef>,
    pub valor_total: String,
    pub valor_entrada: String,
    pub num_parcelas: String,
    /// `YYYY-MM-DD` из `<input type="date">`
    pub data_primeiro_vencimento: String,
}

impl Default for InstallmentPlanDraft {
    fn default() -> Self {
        Self {
            cliente: None,
            valor_total: String::new(),
            valor_entrada: "0".to_string(),
            num_parcelas: "1".to_string(),
            data_primeiro_vencimento: String::new(),
        }
    }
}

/// Тело `POST /boletos/parcelamento`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlanRequest {
    #[serde(rename = "clienteId")]
    pub cliente_id: String,
    #[serde(rename = "valorTotal")]
    pub valor_total: f64,
    #[serde(rename = "valorEntrada")]
    pub valor_entrada: f64,
    #[serde(rename = "numParcelas")]
    pub num_parcelas: u32,
    #[serde(rename = "dataPrimeiroVencimento")]
    pub data_primeiro_vencimento: NaiveDate,
}

impl InstallmentPlanDraft {
    /// Нечисловой текст даёт NaN, и генератор вернёт пустой график
    pub fn total(&self) -> f64 {
        parse_currency(&self.valor_total).unwrap_or(f64::NAN)
    }

    /// Пустой взнос считается нулевым
    pub fn down_payment(&self) -> f64 {
        if self.valor_entrada.trim().is_empty() {
            return 0.0;
        }
        parse_currency(&self.valor_entrada).unwrap_or(f64::NAN)
    }

    pub fn count(&self) -> i64 {
        self.num_parcelas.trim().parse().unwrap_or(0)
    }

    pub fn first_due_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.data_primeiro_vencimento)
    }

    /// Значение поля "Valor por Parcela (Calculado)"
    pub fn amount_per_installment(&self) -> f64 {
        let value = installment_amount(self.total(), self.down_payment(), self.count());
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }

    /// "Prévia das Parcelas". Пустая, если платежей больше [`MAX_INSTALLMENTS`].
    pub fn preview(&self) -> Vec<Installment> {
        if self.count() > MAX_INSTALLMENTS {
            return Vec::new();
        }
        generate_installments(
            self.total(),
            self.down_payment(),
            self.count(),
            self.first_due_date(),
        )
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.cliente.as_ref().and_then(|c| c.id.as_ref()).is_none() {
            errors.add("clienteId", "Selecione um cliente.");
        }

        let total = self.total();
        let down = self.down_payment();
        if !total.is_finite() || total <= 0.0 {
            errors.add("valorTotal", "Informe o valor total.");
        }
        if !down.is_finite() || down < 0.0 {
            errors.add("valorEntrada", "Valor de entrada inválido.");
        } else if total.is_finite() && down >= total {
            errors.add(
                "valorEntrada",
                "A entrada deve ser menor que o valor total.",
            );
        }
        let count = self.count();
        if count < 1 {
            errors.add("numParcelas", "O número de parcelas deve ser pelo menos 1.");
        } else if count > MAX_INSTALLMENTS {
            errors.add(
                "numParcelas",
                format!("O número máximo de parcelas é {}.", MAX_INSTALLMENTS),
            );
        }
        if self.first_due_date().is_none() {
            errors.add(
                "dataPrimeiroVencimento",
                "Informe a data do primeiro vencimento.",
            );
        }

        errors.into_result()
    }

    pub fn to_request(&self) -> Result<InstallmentPlanRequest, FieldErrors> {
        self.validate()?;

        let mut errors = FieldErrors::new();
        let cliente_id = self
            .cliente
            .as_ref()
            .and_then(|c| c.id.as_ref())
            .map(|id| id.0.clone());
        let num_parcelas = u32::try_from(self.count()).ok();
        let first = self.first_due_date();

        match (cliente_id, num_parcelas, first) {
            (Some(cliente_id), Some(num_parcelas), Some(data_primeiro_vencimento)) => {
                Ok(InstallmentPlanRequest {
                    cliente_id,
                    valor_total: self.total(),
                    valor_entrada: self.down_payment(),
                    num_parcelas,
                    data_primeiro_vencimento,
                })
            }
            _ => {
                errors.add("numParcelas", "Número de parcelas inválido.");
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::ClientId;

    fn draft() -> InstallmentPlanDraft {
        InstallmentPlanDraft {
            cliente: Some(ClientRef {
                id: Some(ClientId::new("c1")),
                full_name: "Maria".into(),
                ..Default::default()
            }),
            valor_total: "1.000,00".into(),
            valor_entrada: "200".into(),
            num_parcelas: "4".into(),
            data_primeiro_vencimento: "2025-01-15".into(),
        }
    }

    #[test]
    fn test_preview_follows_form_fields() {
        let d = draft();
        assert_eq!(d.amount_per_installment(), 200.0);
        let preview = d.preview();
        assert_eq!(preview.len(), 4);
        assert_eq!(
            preview[3].due_date,
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_incomplete_form_gives_empty_preview() {
        let mut d = draft();
        d.valor_total = "abc".into();
        assert!(d.preview().is_empty());
        assert_eq!(d.amount_per_installment(), 0.0);

        let mut d = draft();
        d.data_primeiro_vencimento.clear();
        assert!(d.preview().is_empty());

        let mut d = draft();
        d.num_parcelas = "0".into();
        assert!(d.preview().is_empty());
    }

    #[test]
    fn test_grouped_total_is_thousands() {
        let mut d = draft();
        d.valor_total = "1.500".into();
        d.valor_entrada = "0".into();
        d.num_parcelas = "3".into();
        assert_eq!(d.total(), 1500.0);
        assert_eq!(d.amount_per_installment(), 500.0);
        assert_eq!(d.to_request().unwrap().valor_total, 1500.0);
    }

    #[test]
    fn test_installment_count_is_capped() {
        let mut d = draft();
        d.num_parcelas = MAX_INSTALLMENTS.to_string();
        assert_eq!(d.preview().len() as i64, MAX_INSTALLMENTS);
        assert!(d.validate().is_ok());

        d.num_parcelas = "100000000".into();
        assert!(d.preview().is_empty());
        let errors = d.validate().unwrap_err();
        assert_eq!(
            errors.get("numParcelas"),
            Some("O número máximo de parcelas é 360.")
        );
    }

    #[test]
    fn test_blank_down_payment_is_zero() {
        let mut d = draft();
        d.valor_entrada = " ".into();
        assert_eq!(d.down_payment(), 0.0);
        assert_eq!(d.amount_per_installment(), 250.0);
    }

    #[test]
    fn test_request_body() {
        let req = draft().to_request().unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["clienteId"], "c1");
        assert_eq!(json["valorTotal"], 1000.0);
        assert_eq!(json["valorEntrada"], 200.0);
        assert_eq!(json["numParcelas"], 4);
        assert_eq!(json["dataPrimeiroVencimento"], "2025-01-15");
    }

    #[test]
    fn test_down_payment_must_be_below_total() {
        let mut d = draft();
        d.valor_entrada = "1000".into();
        let errors = d.validate().unwrap_err();
        assert_eq!(
            errors.get("valorEntrada"),
            Some("A entrada deve ser menor que o valor total.")
        );
    }

    #[test]
    fn test_default_form_is_invalid() {
        let errors = InstallmentPlanDraft::default().validate().unwrap_err();
        assert!(errors.get("clienteId").is_some());
        assert!(errors.get("valorTotal").is_some());
        assert!(errors.get("dataPrimeiroVencimento").is_some());
        assert!(errors.get("numParcelas").is_none());
    }
}
