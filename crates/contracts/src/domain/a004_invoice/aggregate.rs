use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::aggregation::percent;
use crate::shared::serde_helpers::parse_iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
aggregate_id!(InvoiceId);

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Aberto,
    Pago,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Aberto => "Aberto",
            InvoiceStatus::Pago => "Pago",
        }
    }
}

/// Вкладки списка: значение уходит в `?status=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvoiceStatusFilter {
    #[default]
    Todos,
    Abertos,
    Pagos,
    Atrasados,
}

impl InvoiceStatusFilter {
    pub const ALL: [InvoiceStatusFilter; 4] = [
        InvoiceStatusFilter::Todos,
        InvoiceStatusFilter::Abertos,
        InvoiceStatusFilter::Pagos,
        InvoiceStatusFilter::Atrasados,
    ];

    pub fn as_query(&self) -> &'static str {
        match self {
            InvoiceStatusFilter::Todos => "Todos",
            InvoiceStatusFilter::Abertos => "Abertos",
            InvoiceStatusFilter::Pagos => "Pagos",
            InvoiceStatusFilter::Atrasados => "Atrasados",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_query()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: InvoiceId,
    #[serde(rename = "clienteInfo", default)]
    pub cliente_info: ClientInfo,
    #[serde(rename = "parcelValue", default)]
    pub parcel_value: f64,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn due(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.due_date)
    }

    /// Открытый платёж с прошедшим сроком. Платёж со сроком сегодня ещё не просрочен.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == InvoiceStatus::Aberto && self.due().is_some_and(|d| d < today)
    }

    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Pago
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        if self.description.is_empty() {
            format!("Boleto {}", self.id.as_string())
        } else {
            self.description.clone()
        }
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "boletos"
    }

    fn element_name() -> &'static str {
        "Boleto"
    }

    fn list_name() -> &'static str {
        "Boletos"
    }
}

/// Тело `PATCH /boletos/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkPaidRequest {
    pub status: InvoiceStatus,
}

impl MarkPaidRequest {
    pub fn paid() -> Self {
        Self {
            status: InvoiceStatus::Pago,
        }
    }
}

// ============================================================================
// Группировка по месяцам
// ============================================================================
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// Название месяца по номеру 1..=12
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthKey {
    pub ano: i32,
    pub mes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMonthGroup {
    #[serde(rename = "_id")]
    pub key: MonthKey,
    #[serde(default)]
    pub boletos: Vec<Invoice>,
    #[serde(rename = "valorTotalMes", default)]
    pub valor_total_mes: f64,
    #[serde(rename = "pagosNoMes", default)]
    pub pagos_no_mes: f64,
}

impl InvoiceMonthGroup {
    /// "Março de 2025"
    pub fn month_label(&self) -> String {
        match month_name(self.key.mes) {
            Some(name) => format!("{} de {}", name, self.key.ano),
            None => format!("{:02}/{}", self.key.mes, self.key.ano),
        }
    }

    /// Процент оплаченного в месяце, 0 для пустой группы
    pub fn progress_percent(&self) -> f64 {
        percent(self.pagos_no_mes, self.valor_total_mes).min(100.0)
    }

    pub fn remaining(&self) -> f64 {
        (self.valor_total_mes - self.pagos_no_mes).max(0.0)
    }

    pub fn overdue_count(&self, today: NaiveDate) -> usize {
        self.boletos.iter().filter(|b| b.is_overdue(today)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(due: &str, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId::new("b1"),
            cliente_info: ClientInfo {
                full_name: "Maria".into(),
            },
            parcel_value: 200.0,
            due_date: due.into(),
            description: "Parcela 1/4".into(),
            status,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overdue_only_when_open_and_past_due() {
        let today = day(2025, 3, 10);
        assert!(invoice("2025-03-09T00:00:00.000Z", InvoiceStatus::Aberto).is_overdue(today));
        assert!(!invoice("2025-03-10", InvoiceStatus::Aberto).is_overdue(today));
        assert!(!invoice("2025-03-09", InvoiceStatus::Pago).is_overdue(today));
        assert!(!invoice("", InvoiceStatus::Aberto).is_overdue(today));
    }

    #[test]
    fn test_month_group_from_api() {
        let raw = r#"[{
            "_id": {"ano": 2025, "mes": 3},
            "boletos": [
                {"_id": "b1", "clienteInfo": {"fullName": "Maria"}, "parcelValue": 200, "dueDate": "2025-03-05", "description": "Parcela 1/2", "status": "pago"},
                {"_id": "b2", "clienteInfo": {"fullName": "João"}, "parcelValue": 300, "dueDate": "2025-03-08", "description": "Parcela 2/2", "status": "aberto"}
            ],
            "valorTotalMes": 500,
            "pagosNoMes": 200
        }]"#;
        let groups: Vec<InvoiceMonthGroup> = serde_json::from_str(raw).unwrap();
        let g = &groups[0];
        assert_eq!(g.month_label(), "Março de 2025");
        assert_eq!(g.progress_percent(), 40.0);
        assert_eq!(g.remaining(), 300.0);
        assert_eq!(g.overdue_count(day(2025, 3, 10)), 1);
        assert!(g.boletos[0].is_paid());
    }

    #[test]
    fn test_empty_group_progress_is_zero() {
        let g = InvoiceMonthGroup {
            key: MonthKey { ano: 2025, mes: 13 },
            boletos: vec![],
            valor_total_mes: 0.0,
            pagos_no_mes: 0.0,
        };
        assert_eq!(g.progress_percent(), 0.0);
        assert_eq!(g.month_label(), "13/2025");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("Janeiro"));
        assert_eq!(month_name(12), Some("Dezembro"));
        assert_eq!(month_name(0), None);
    }

    #[test]
    fn test_mark_paid_body() {
        let json = serde_json::to_string(&MarkPaidRequest::paid()).unwrap();
        assert_eq!(json, r#"{"status":"pago"}"#);
    }

    #[test]
    fn test_filter_query_values() {
        let values: Vec<_> = InvoiceStatusFilter::ALL.iter().map(|f| f.as_query()).collect();
        assert_eq!(values, ["Todos", "Abertos", "Pagos", "Atrasados"]);
    }
}
