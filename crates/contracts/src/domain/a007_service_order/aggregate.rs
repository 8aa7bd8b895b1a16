use crate::domain::a001_client::ClientRef;
use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
aggregate_id!(ServiceOrderId);

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceOrderStatus {
    #[default]
    #[serde(rename = "Aguardando Laboratório")]
    AwaitingLab,
    #[serde(rename = "Em Produção")]
    InProduction,
    #[serde(rename = "Em Montagem")]
    Assembling,
    #[serde(rename = "Disponível para Retirada")]
    ReadyForPickup,
    #[serde(rename = "Entregue")]
    Delivered,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl ServiceOrderStatus {
    pub const ALL: [ServiceOrderStatus; 6] = [
        ServiceOrderStatus::AwaitingLab,
        ServiceOrderStatus::InProduction,
        ServiceOrderStatus::Assembling,
        ServiceOrderStatus::ReadyForPickup,
        ServiceOrderStatus::Delivered,
        ServiceOrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceOrderStatus::AwaitingLab => "Aguardando Laboratório",
            ServiceOrderStatus::InProduction => "Em Produção",
            ServiceOrderStatus::Assembling => "Em Montagem",
            ServiceOrderStatus::ReadyForPickup => "Disponível para Retirada",
            ServiceOrderStatus::Delivered => "Entregue",
            ServiceOrderStatus::Cancelled => "Cancelada",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Ордер закрыт и больше не движется по статусам
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            ServiceOrderStatus::Delivered | ServiceOrderStatus::Cancelled
        )
    }
}

// ============================================================================
// Вложенные документы
// ============================================================================

/// Рецепт в ордере. Сервер присылает значения то строкой, то числом.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicePrescription {
    #[serde(rename = "esfericoDireito", default, deserialize_with = "string_or_number")]
    pub esferico_direito: Option<String>,
    #[serde(rename = "cilindricoDireito", default, deserialize_with = "string_or_number")]
    pub cilindrico_direito: Option<String>,
    #[serde(rename = "eixoDireito", default, deserialize_with = "string_or_number")]
    pub eixo_direito: Option<String>,
    #[serde(rename = "esfericoEsquerdo", default, deserialize_with = "string_or_number")]
    pub esferico_esquerdo: Option<String>,
    #[serde(rename = "cilindricoEsquerdo", default, deserialize_with = "string_or_number")]
    pub cilindrico_esquerdo: Option<String>,
    #[serde(rename = "eixoEsquerdo", default, deserialize_with = "string_or_number")]
    pub eixo_esquerdo: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub adicao: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub altura: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub dp: Option<String>,
}

impl ServicePrescription {
    /// Пары "подпись, значение" для правого глаза
    pub fn right_eye(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("Esférico", self.esferico_direito.as_deref()),
            ("Cilíndrico", self.cilindrico_direito.as_deref()),
            ("Eixo", self.eixo_direito.as_deref()),
        ]
    }

    pub fn left_eye(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("Esférico", self.esferico_esquerdo.as_deref()),
            ("Cilíndrico", self.cilindrico_esquerdo.as_deref()),
            ("Eixo", self.eixo_esquerdo.as_deref()),
        ]
    }

    pub fn extras(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("Adição", self.adicao.as_deref()),
            ("Altura", self.altura.as_deref()),
            ("DP", self.dp.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceProduct {
    #[serde(default)]
    pub produto: Option<String>,
    #[serde(default)]
    pub nome: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSaleRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    #[serde(rename = "_id")]
    pub id: ServiceOrderId,
    #[serde(rename = "numeroOS", default, deserialize_with = "string_or_number")]
    pub numero_os: Option<String>,
    #[serde(default)]
    pub cliente: ClientRef,
    #[serde(default)]
    pub venda: Option<ServiceSaleRef>,
    #[serde(default)]
    pub status: ServiceOrderStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "previsaoEntrega", default)]
    pub previsao_entrega: Option<String>,
    #[serde(rename = "dataEntrega", default)]
    pub data_entrega: Option<String>,
    #[serde(default)]
    pub receita: ServicePrescription,
    #[serde(rename = "produtosServico", default)]
    pub produtos_servico: Vec<ServiceProduct>,
}

impl ServiceOrder {
    /// "#123" или "#--", если номер ещё не присвоен
    pub fn number_label(&self) -> String {
        format!("#{}", self.numero_os.as_deref().unwrap_or("--"))
    }

    pub fn sale_id(&self) -> Option<&str> {
        self.venda.as_ref().and_then(|v| v.id.as_deref())
    }

    /// Поиск по номеру и имени клиента
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.numero_os
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(&term))
            || self.cliente.full_name.to_lowercase().contains(&term)
    }
}

impl AggregateRoot for ServiceOrder {
    type Id = ServiceOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        format!("O.S. {}", self.number_label())
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "ordens-servico"
    }

    fn element_name() -> &'static str {
        "Ordem de Serviço"
    }

    fn list_name() -> &'static str {
        "Ordens de Serviço"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_sale::StatusPatch;

    const RAW: &str = r#"{
        "_id": "os1",
        "numeroOS": 1042,
        "cliente": {"_id": "c1", "fullName": "Maria Souza", "email": "m@x.com", "phone": "11987654321"},
        "venda": {"_id": "v9"},
        "status": "Em Montagem",
        "createdAt": "2025-03-01T12:00:00.000Z",
        "previsaoEntrega": "2025-03-08T00:00:00.000Z",
        "receita": {"esfericoDireito": "-1,25", "eixoDireito": 90, "dp": 62},
        "produtosServico": [{"produto": "p1", "nome": "Lente multifocal"}]
    }"#;

    #[test]
    fn test_decode_populated_order() {
        let os: ServiceOrder = serde_json::from_str(RAW).unwrap();
        assert_eq!(os.number_label(), "#1042");
        assert_eq!(os.status, ServiceOrderStatus::Assembling);
        assert_eq!(os.sale_id(), Some("v9"));
        assert_eq!(os.receita.eixo_direito.as_deref(), Some("90"));
        assert_eq!(os.receita.extras()[2], ("DP", Some("62")));
        assert_eq!(os.receita.left_eye()[0].1, None);
        assert!(os.data_entrega.is_none());
    }

    #[test]
    fn test_search() {
        let os: ServiceOrder = serde_json::from_str(RAW).unwrap();
        assert!(os.matches("104"));
        assert!(os.matches("souza"));
        assert!(os.matches("  "));
        assert!(!os.matches("pedro"));
    }

    #[test]
    fn test_status_labels_round_trip() {
        for status in ServiceOrderStatus::ALL {
            assert_eq!(ServiceOrderStatus::from_label(status.label()), Some(status));
        }
        assert!(ServiceOrderStatus::Cancelled.is_final());
        assert!(!ServiceOrderStatus::ReadyForPickup.is_final());
    }

    #[test]
    fn test_status_patch_body() {
        let body = StatusPatch {
            status: ServiceOrderStatus::ReadyForPickup,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"Disponível para Retirada"}"#
        );
    }
}
