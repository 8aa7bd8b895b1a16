use crate::shared::http::{item_path, ApiClient};
use contracts::domain::a001_client::{Client, ClientDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(api: &ApiClient, id: &str) -> Result<Client, ApiError> {
    api.get(&item_path(&Client::api_path(), id)).await
}

/// POST для нового клиента, PUT для существующего
pub async fn save_form(api: &ApiClient, dto: &ClientDto) -> Result<(), ApiError> {
    match &dto.id {
        Some(id) => api.put_unit(&item_path(&Client::api_path(), id), dto).await,
        None => api.post_unit(&Client::api_path(), dto).await,
    }
}
