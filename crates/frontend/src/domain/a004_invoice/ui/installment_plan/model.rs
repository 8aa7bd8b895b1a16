use crate::shared::http::ApiClient;
use contracts::domain::a004_invoice::{Invoice, InstallmentPlanRequest};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;

/// Путь создания парцелирования: сервер сам создаёт boletos
pub fn plan_path() -> String {
    format!("{}/parcelamento", Invoice::api_path())
}

pub async fn create_plan(api: &ApiClient, request: &InstallmentPlanRequest) -> Result<(), ApiError> {
    api.post_unit(&plan_path(), request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_path() {
        assert_eq!(plan_path(), "/boletos/parcelamento");
    }
}
