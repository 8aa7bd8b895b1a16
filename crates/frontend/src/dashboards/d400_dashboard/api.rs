use crate::shared::http::ApiClient;
use contracts::dashboards::d400_dashboard::DashboardStats;
use contracts::shared::api_error::ApiError;

const DASHBOARD_PATH: &str = "/dashboard";

/// Сводка для главной страницы
pub async fn get_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    api.get(DASHBOARD_PATH).await
}
