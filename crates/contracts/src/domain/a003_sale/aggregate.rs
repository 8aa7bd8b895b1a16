use crate::domain::a001_client::ClientRef;
use crate::domain::a002_product::ProductRef;
use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
aggregate_id!(SaleId);

// ============================================================================
// Enums
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SaleStatus {
    #[default]
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl SaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pendente",
            SaleStatus::Completed => "Concluído",
            SaleStatus::Cancelled => "Cancelado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Dinheiro")]
    Cash,
    #[serde(rename = "Cartão de Crédito")]
    CreditCard,
    #[serde(rename = "Cartão de Débito")]
    DebitCard,
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "Boleto")]
    Boleto,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Pix,
        PaymentMethod::Boleto,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::CreditCard => "Cartão de Crédito",
            PaymentMethod::DebitCard => "Cartão de Débito",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Boleto => "Boleto",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Способы, для которых имеет смысл число платежей
    pub fn allows_installments(&self) -> bool {
        matches!(self, PaymentMethod::CreditCard | PaymentMethod::Boleto)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentCondition {
    #[serde(rename = "À vista")]
    Upfront,
    #[serde(rename = "A prazo")]
    Deferred,
}

impl PaymentCondition {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentCondition::Upfront => "À vista",
            PaymentCondition::Deferred => "A prazo",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerRef {
    #[serde(default)]
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub produto: ProductRef,
    pub quantidade: f64,
    #[serde(rename = "valorUnitario", alias = "precoUnitario")]
    pub valor_unitario: f64,
}

impl SaleItem {
    pub fn subtotal(&self) -> f64 {
        self.quantidade * self.valor_unitario
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "valorEntrada", default)]
    pub valor_entrada: f64,
    #[serde(rename = "valorRestante", default)]
    pub valor_restante: f64,
    #[serde(rename = "metodoPagamento", default)]
    pub metodo_pagamento: Option<PaymentMethod>,
    #[serde(rename = "condicaoPagamento", default)]
    pub condicao_pagamento: Option<PaymentCondition>,
    #[serde(default)]
    pub parcelas: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(rename = "_id")]
    pub id: SaleId,
    #[serde(default)]
    pub cliente: ClientRef,
    #[serde(default)]
    pub vendedor: Option<SellerRef>,
    #[serde(default)]
    pub produtos: Vec<SaleItem>,
    #[serde(rename = "valorTotal", default)]
    pub valor_total: f64,
    #[serde(default)]
    pub pagamento: Option<Payment>,
    #[serde(default)]
    pub status: SaleStatus,
    #[serde(rename = "dataVenda", default)]
    pub data_venda: String,
}

impl Sale {
    /// Сумма по строкам; может отличаться от `valor_total`, если сервер дал скидку
    pub fn items_total(&self) -> f64 {
        self.produtos.iter().map(SaleItem::subtotal).sum()
    }

    pub fn can_complete(&self) -> bool {
        self.status == SaleStatus::Pending
    }
}

impl AggregateRoot for Sale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        format!("Venda {}", self.id.as_string())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "vendas"
    }

    fn element_name() -> &'static str {
        "Venda"
    }

    fn list_name() -> &'static str {
        "Vendas"
    }
}

/// Тело `PATCH /vendas/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPatch<S> {
    pub status: S,
}

// ============================================================================
// Draft (форма новой продажи)
// ============================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct SaleItemDraft {
    pub produto: ProductRef,
    pub quantidade: f64,
    pub preco_unitario: f64,
}

impl SaleItemDraft {
    /// Новая строка с ценой продажи товара по умолчанию
    pub fn for_product(produto: ProductRef) -> Self {
        let preco_unitario = produto.preco_venda.unwrap_or(0.0);
        Self {
            produto,
            quantidade: 1.0,
            preco_unitario,
        }
    }

    pub fn subtotal(&self) -> f64 {
        let q = if self.quantidade.is_finite() { self.quantidade } else { 0.0 };
        let p = if self.preco_unitario.is_finite() { self.preco_unitario } else { 0.0 };
        q * p
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaleDraft {
    pub cliente: Option<ClientRef>,
    pub itens: Vec<SaleItemDraft>,
    pub metodo: Option<PaymentMethod>,
    pub parcelas: u32,
    pub valor_entrada: f64,
    /// `YYYY-MM-DD`
    pub data_venda: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayloadItem {
    pub produto: String,
    pub quantidade: f64,
    #[serde(rename = "precoUnitario")]
    pub preco_unitario: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayloadPayment {
    pub metodo: PaymentMethod,
    pub parcelas: u32,
    #[serde(rename = "valorEntrada")]
    pub valor_entrada: f64,
}

/// Тело `POST /vendas` и `PUT /vendas/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    pub cliente: String,
    pub itens: Vec<SalePayloadItem>,
    pub pagamento: SalePayloadPayment,
    #[serde(rename = "valorTotal")]
    pub valor_total: f64,
    #[serde(rename = "dataVenda")]
    pub data_venda: String,
}

impl SaleDraft {
    pub fn new(today: &str) -> Self {
        Self {
            parcelas: 1,
            data_venda: today.to_string(),
            ..Default::default()
        }
    }

    /// Итог продажи: сумма количество × цена по всем строкам
    pub fn total(&self) -> f64 {
        self.itens.iter().map(SaleItemDraft::subtotal).sum()
    }

    /// Остаток после первоначального взноса (не меньше нуля)
    pub fn remaining(&self) -> f64 {
        let entrada = if self.valor_entrada.is_finite() { self.valor_entrada } else { 0.0 };
        (self.total() - entrada).max(0.0)
    }

    /// Добавляет товар; если он уже есть в списке, увеличивает количество
    pub fn add_product(&mut self, produto: ProductRef) {
        let existing = self
            .itens
            .iter_mut()
            .find(|i| i.produto.id.is_some() && i.produto.id == produto.id);
        match existing {
            Some(item) => item.quantidade += 1.0,
            None => self.itens.push(SaleItemDraft::for_product(produto)),
        }
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.itens.len() {
            self.itens.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.cliente.as_ref().and_then(|c| c.id.as_ref()).is_none() {
            errors.add("cliente", "Cliente é obrigatório.");
        }
        if self.itens.is_empty() {
            errors.add("itens", "A venda deve ter pelo menos um item.");
        }
        let quantity = ValidationRules::required()
            .with_min(1.0)
            .with_message("A quantidade deve ser pelo menos 1");
        let price = ValidationRules::required()
            .with_min(0.0)
            .with_message("O preço deve ser positivo");
        for item in &self.itens {
            errors.check("quantidade", quantity.validate_number(Some(item.quantidade), "Quantidade"));
            errors.check("precoUnitario", price.validate_number(Some(item.preco_unitario), "Preço"));
        }
        if self.metodo.is_none() {
            errors.add("metodo", "Método de pagamento é obrigatório.");
        }
        if self.valor_entrada < 0.0 || !self.valor_entrada.is_finite() {
            errors.add("valorEntrada", "O valor pendente não pode ser negativo.");
        }
        if self.data_venda.trim().is_empty() {
            errors.add("dataVenda", "Data da venda é obrigatória.");
        }

        errors.into_result()
    }

    /// Проверяет черновик и собирает тело запроса
    pub fn to_payload(&self) -> Result<SalePayload, FieldErrors> {
        self.validate()?;

        let cliente = self
            .cliente
            .as_ref()
            .and_then(|c| c.id.as_ref())
            .map(AggregateId::as_string)
            .unwrap_or_default();
        let metodo = self.metodo.unwrap_or(PaymentMethod::Cash);
        let parcelas = if metodo.allows_installments() {
            self.parcelas.max(1)
        } else {
            1
        };

        Ok(SalePayload {
            cliente,
            itens: self
                .itens
                .iter()
                .map(|i| SalePayloadItem {
                    produto: i.produto.id.as_ref().map(AggregateId::as_string).unwrap_or_default(),
                    quantidade: i.quantidade,
                    preco_unitario: i.preco_unitario,
                })
                .collect(),
            pagamento: SalePayloadPayment {
                metodo,
                parcelas,
                valor_entrada: self.valor_entrada,
            },
            valor_total: self.total(),
            data_venda: self.data_venda.clone(),
        })
    }
}

impl From<Sale> for SaleDraft {
    fn from(sale: Sale) -> Self {
        let pagamento = sale.pagamento.as_ref();
        Self {
            cliente: Some(sale.cliente.clone()),
            itens: sale
                .produtos
                .iter()
                .map(|i| SaleItemDraft {
                    produto: i.produto.clone(),
                    quantidade: i.quantidade,
                    preco_unitario: i.valor_unitario,
                })
                .collect(),
            metodo: pagamento.and_then(|p| p.metodo_pagamento),
            parcelas: pagamento.and_then(|p| p.parcelas).unwrap_or(1),
            valor_entrada: pagamento.map(|p| p.valor_entrada).unwrap_or(0.0),
            data_venda: sale
                .data_venda
                .split('T')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::ClientId;
    use crate::domain::a002_product::ProductId;

    fn product(id: &str, price: f64) -> ProductRef {
        ProductRef {
            id: Some(ProductId::new(id)),
            nome: format!("Produto {}", id),
            codigo: Some(id.to_uppercase()),
            preco_venda: Some(price),
        }
    }

    fn draft() -> SaleDraft {
        let mut d = SaleDraft::new("2025-03-10");
        d.cliente = Some(ClientRef {
            id: Some(ClientId::new("c1")),
            full_name: "Maria".into(),
            ..Default::default()
        });
        d.add_product(product("a", 150.0));
        d.add_product(product("b", 49.9));
        d.add_product(product("a", 150.0));
        d.metodo = Some(PaymentMethod::CreditCard);
        d.parcelas = 3;
        d
    }

    #[test]
    fn test_total_is_sum_of_quantity_times_price() {
        let d = draft();
        assert_eq!(d.itens.len(), 2);
        assert_eq!(d.itens[0].quantidade, 2.0);
        assert!((d.total() - 349.9).abs() < 1e-9);
    }

    #[test]
    fn test_remaining_after_down_payment() {
        let mut d = draft();
        d.valor_entrada = 100.0;
        assert!((d.remaining() - 249.9).abs() < 1e-9);
        d.valor_entrada = 1000.0;
        assert_eq!(d.remaining(), 0.0);
    }

    #[test]
    fn test_payload_matches_api_shape() {
        let payload = draft().to_payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["cliente"], "c1");
        assert_eq!(json["itens"][0]["produto"], "a");
        assert_eq!(json["itens"][0]["precoUnitario"], 150.0);
        assert_eq!(json["pagamento"]["metodo"], "Cartão de Crédito");
        assert_eq!(json["pagamento"]["parcelas"], 3);
        assert_eq!(json["dataVenda"], "2025-03-10");
    }

    #[test]
    fn test_cash_sale_is_single_installment() {
        let mut d = draft();
        d.metodo = Some(PaymentMethod::Pix);
        assert_eq!(d.to_payload().unwrap().pagamento.parcelas, 1);
    }

    #[test]
    fn test_empty_draft_reports_every_problem() {
        let errors = SaleDraft::new("").validate().unwrap_err();
        assert_eq!(errors.get("cliente"), Some("Cliente é obrigatório."));
        assert_eq!(errors.get("itens"), Some("A venda deve ter pelo menos um item."));
        assert_eq!(errors.get("metodo"), Some("Método de pagamento é obrigatório."));
        assert_eq!(errors.get("dataVenda"), Some("Data da venda é obrigatória."));
    }

    #[test]
    fn test_item_rules() {
        let mut d = draft();
        d.itens[1].quantidade = 0.0;
        d.itens[0].preco_unitario = -1.0;
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.get("quantidade"), Some("A quantidade deve ser pelo menos 1"));
        assert_eq!(errors.get("precoUnitario"), Some("O preço deve ser positivo"));
    }

    #[test]
    fn test_populated_sale_from_api() {
        let raw = r#"{
            "_id": "v1",
            "cliente": {"_id": "c1", "fullName": "Maria", "email": "m@x.com"},
            "produtos": [{"_id": "i1", "produto": {"_id": "p1", "nome": "Armação", "codigo": "A1"}, "quantidade": 2, "valorUnitario": 120}],
            "valorTotal": 240,
            "pagamento": {"valorEntrada": 40, "valorRestante": 200, "metodoPagamento": "Boleto", "condicaoPagamento": "A prazo", "parcelas": 4},
            "status": "Concluído",
            "dataVenda": "2025-03-10T00:00:00.000Z"
        }"#;
        let sale: Sale = serde_json::from_str(raw).unwrap();
        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(sale.items_total(), 240.0);
        assert!(!sale.can_complete());

        let d = SaleDraft::from(sale);
        assert_eq!(d.data_venda, "2025-03-10");
        assert_eq!(d.metodo, Some(PaymentMethod::Boleto));
        assert_eq!(d.parcelas, 4);
        assert_eq!(d.valor_entrada, 40.0);
    }

    #[test]
    fn test_list_item_without_details() {
        let raw = r#"{"_id":"v2","cliente":{"fullName":"João"},"vendedor":{"nome":"Ana"},"valorTotal":99.9,"dataVenda":"2025-01-02"}"#;
        let sale: Sale = serde_json::from_str(raw).unwrap();
        assert_eq!(sale.status, SaleStatus::Pending);
        assert_eq!(sale.vendedor.unwrap().nome, "Ana");
        assert!(sale.produtos.is_empty());
    }
}
