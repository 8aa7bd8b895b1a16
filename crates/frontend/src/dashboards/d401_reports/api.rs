use crate::shared::http::ApiClient;
use contracts::dashboards::d401_reports::{
    to_bars, BarRow, CashFlowPoint, NamedValue, ReportKind, RevenuePoint, TopClient,
};
use contracts::shared::api_error::ApiError;

/// Загружает серию отчёта и сразу переводит её в строки диаграммы
pub async fn get_report(api: &ApiClient, kind: ReportKind) -> Result<Vec<BarRow>, ApiError> {
    let path = kind.api_path();
    let rows = match kind {
        ReportKind::MonthlyRevenue => {
            let items: Vec<RevenuePoint> = api.get(path).await?;
            to_bars(&items, |p| p.mes.clone(), |p| p.faturamento)
        }
        ReportKind::SalesByMethod | ReportKind::AppointmentEfficiency => {
            let items: Vec<NamedValue> = api.get(path).await?;
            to_bars(&items, |p| p.name.clone(), |p| p.value)
        }
        ReportKind::TopClients => {
            let items: Vec<TopClient> = api.get(path).await?;
            to_bars(&items, |p| p.name.clone(), |p| p.total_gasto)
        }
        ReportKind::FutureCashFlow => {
            let items: Vec<CashFlowPoint> = api.get(path).await?;
            to_bars(&items, |p| p.mes.clone(), |p| p.valor_a_receber)
        }
    };
    Ok(rows)
}
