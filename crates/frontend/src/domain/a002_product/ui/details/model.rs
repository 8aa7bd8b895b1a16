use crate::shared::http::{item_path, ApiClient};
use contracts::domain::a002_product::{Product, ProductDto, ProductKind};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::money::{format_decimal, parse_currency};

/// Состояние формы: числа хранятся текстом, как их набирает пользователь
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<String>,
    pub codigo: String,
    pub nome: String,
    pub preco_custo: String,
    pub preco_venda: String,
    pub estoque: String,
    pub tipo: ProductKind,
}

impl ProductForm {
    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            id: self.id.clone(),
            codigo: self.codigo.trim().to_string(),
            nome: self.nome.trim().to_string(),
            preco_custo: parse_currency(&self.preco_custo),
            preco_venda: parse_currency(&self.preco_venda),
            estoque: parse_currency(&self.estoque),
            tipo: self.tipo,
        }
    }
}

impl From<Product> for ProductForm {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.id.0),
            codigo: p.codigo,
            nome: p.nome,
            preco_custo: format_decimal(p.preco_custo, 2),
            preco_venda: format_decimal(p.preco_venda, 2),
            estoque: p.estoque.to_string(),
            tipo: p.tipo,
        }
    }
}

pub async fn fetch_by_id(api: &ApiClient, id: &str) -> Result<Product, ApiError> {
    api.get(&item_path(&Product::api_path(), id)).await
}

pub async fn save_form(api: &ApiClient, dto: &ProductDto) -> Result<(), ApiError> {
    match &dto.id {
        Some(id) => api.put_unit(&item_path(&Product::api_path(), id), dto).await,
        None => api.post_unit(&Product::api_path(), dto).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_prices_are_parsed() {
        let form = ProductForm {
            codigo: " LC-10 ".into(),
            nome: "Lente Acuvue".into(),
            preco_custo: "1.234,50".into(),
            preco_venda: "abc".into(),
            estoque: "12".into(),
            ..Default::default()
        };
        let dto = form.to_dto();
        assert_eq!(dto.codigo, "LC-10");
        assert_eq!(dto.preco_custo, Some(1234.5));
        assert_eq!(dto.preco_venda, None);
        assert_eq!(dto.estoque, Some(12.0));
    }
}
