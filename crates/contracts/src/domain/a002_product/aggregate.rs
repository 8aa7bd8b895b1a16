use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
aggregate_id!(ProductId);

/// Тип товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    #[serde(rename = "Óculos de Sol")]
    SunGlasses,
    #[default]
    #[serde(rename = "Óculos de Grau")]
    PrescriptionGlasses,
    #[serde(rename = "Lente de Contato")]
    ContactLens,
    #[serde(rename = "Serviço/Conserto")]
    Service,
}

impl ProductKind {
    pub const ALL: [ProductKind; 4] = [
        ProductKind::SunGlasses,
        ProductKind::PrescriptionGlasses,
        ProductKind::ContactLens,
        ProductKind::Service,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::SunGlasses => "Óculos de Sol",
            ProductKind::PrescriptionGlasses => "Óculos de Grau",
            ProductKind::ContactLens => "Lente de Contato",
            ProductKind::Service => "Serviço/Conserto",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }

    /// Услуги не учитываются на складе
    pub fn tracks_stock(&self) -> bool {
        !matches!(self, ProductKind::Service)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub codigo: String,
    pub nome: String,
    #[serde(rename = "precoCusto", default)]
    pub preco_custo: f64,
    #[serde(rename = "precoVenda", default)]
    pub preco_venda: f64,
    #[serde(default)]
    pub estoque: i64,
    #[serde(default)]
    pub tipo: ProductKind,
}

impl Product {
    /// Наценка в процентах к себестоимости
    pub fn markup_percent(&self) -> Option<f64> {
        (self.preco_custo > 0.0)
            .then(|| (self.preco_venda - self.preco_custo) / self.preco_custo * 100.0)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.tipo.tracks_stock() && self.estoque <= 0
    }

    pub fn to_ref(&self) -> ProductRef {
        ProductRef {
            id: Some(self.id.clone()),
            nome: self.nome.clone(),
            codigo: Some(self.codigo.clone()),
            preco_venda: Some(self.preco_venda),
        }
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> String {
        format!("{} - {}", self.codigo, self.nome)
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "produtos"
    }

    fn element_name() -> &'static str {
        "Produto"
    }

    fn list_name() -> &'static str {
        "Produtos"
    }
}

/// Товар внутри продажи или ордера
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "_id", default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub codigo: Option<String>,
    #[serde(rename = "precoVenda", default, skip_serializing_if = "Option::is_none")]
    pub preco_venda: Option<f64>,
}

// ============================================================================
// DTO
// ============================================================================
/// Форма товара. Числовые поля `None`, пока ввод пустой или не число.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub codigo: String,
    pub nome: String,
    #[serde(rename = "precoCusto")]
    pub preco_custo: Option<f64>,
    #[serde(rename = "precoVenda")]
    pub preco_venda: Option<f64>,
    pub estoque: Option<f64>,
    pub tipo: ProductKind,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "codigo",
            ValidationRules::required()
                .with_message("Código é obrigatório.")
                .validate_string(&self.codigo, "Código"),
        );
        errors.check(
            "nome",
            ValidationRules::min_length(3)
                .with_message("O nome deve ter no mínimo 3 caracteres.")
                .validate_string(&self.nome, "Nome"),
        );
        errors.check(
            "precoCusto",
            ValidationRules::required()
                .with_min(0.0)
                .validate_number(self.preco_custo, "Preço de custo"),
        );
        errors.check(
            "precoVenda",
            ValidationRules::required()
                .with_min(0.0)
                .validate_number(self.preco_venda, "Preço de venda"),
        );
        errors.check(
            "estoque",
            ValidationRules::required()
                .integer()
                .validate_number(self.estoque, "Estoque"),
        );
        errors.into_result()
    }
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.id.0),
            codigo: p.codigo,
            nome: p.nome,
            preco_custo: Some(p.preco_custo),
            preco_venda: Some(p.preco_venda),
            estoque: Some(p.estoque as f64),
            tipo: p.tipo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_match_wire_values() {
        for kind in ProductKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
            assert_eq!(ProductKind::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn test_validation_messages() {
        let dto = ProductDto {
            codigo: "".into(),
            nome: "Ar".into(),
            preco_custo: None,
            preco_venda: Some(-5.0),
            estoque: Some(1.5),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("codigo"), Some("Código é obrigatório."));
        assert_eq!(errors.get("nome"), Some("O nome deve ter no mínimo 3 caracteres."));
        assert_eq!(errors.get("precoCusto"), Some("Preço de custo é obrigatório."));
        assert_eq!(errors.get("precoVenda"), Some("Preço de venda deve ser no mínimo 0."));
        assert_eq!(errors.get("estoque"), Some("Estoque deve ser um número inteiro."));
    }

    #[test]
    fn test_markup_and_stock() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","codigo":"RB-01","nome":"Ray-Ban Aviador","precoCusto":200,"precoVenda":450,"estoque":0,"tipo":"Óculos de Sol"}"#,
        )
        .unwrap();
        assert_eq!(product.markup_percent(), Some(125.0));
        assert!(product.is_out_of_stock());
        assert_eq!(product.description(), "RB-01 - Ray-Ban Aviador");
    }
}
