use crate::shared::http::{item_path, ApiClient};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_sale::{Sale, SalePayload};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::ListQuery;

/// Сколько товаров показывать в выпадающем поиске
pub const PICKER_LIMIT: usize = 8;

pub async fn fetch_sale(api: &ApiClient, id: &str) -> Result<Sale, ApiError> {
    api.get(&item_path(&Sale::api_path(), id)).await
}

pub async fn search_products(api: &ApiClient, term: &str) -> Result<Vec<Product>, ApiError> {
    let query = ListQuery::new().with_search(term);
    api.get_with_query(&Product::api_path(), &query).await
}

pub async fn save_sale(
    api: &ApiClient,
    id: Option<&str>,
    payload: &SalePayload,
) -> Result<(), ApiError> {
    match id {
        Some(id) => api.put_unit(&item_path(&Sale::api_path(), id), payload).await,
        None => api.post_unit(&Sale::api_path(), payload).await,
    }
}
