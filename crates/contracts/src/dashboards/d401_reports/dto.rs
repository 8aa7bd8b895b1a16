use crate::shared::aggregation::bar_widths;
use serde::{Deserialize, Serialize};

/// Report series served under `/relatorios/*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    MonthlyRevenue,
    SalesByMethod,
    TopClients,
    AppointmentEfficiency,
    FutureCashFlow,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::MonthlyRevenue,
        ReportKind::SalesByMethod,
        ReportKind::TopClients,
        ReportKind::AppointmentEfficiency,
        ReportKind::FutureCashFlow,
    ];

    pub fn api_path(&self) -> &'static str {
        match self {
            ReportKind::MonthlyRevenue => "/relatorios/faturamento-mensal",
            ReportKind::SalesByMethod => "/relatorios/vendas-por-metodo",
            ReportKind::TopClients => "/relatorios/top-clientes",
            ReportKind::AppointmentEfficiency => "/relatorios/eficiencia-agendamentos",
            ReportKind::FutureCashFlow => "/relatorios/fluxo-caixa-futuro",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::MonthlyRevenue => "Faturamento Mensal",
            ReportKind::SalesByMethod => "Vendas por Método de Pagamento",
            ReportKind::TopClients => "Top 5 Clientes",
            ReportKind::AppointmentEfficiency => "Eficiência de Agendamentos",
            ReportKind::FutureCashFlow => "Fluxo de Caixa Futuro (Boletos)",
        }
    }

    /// Серии с деньгами форматируются как R$, остальные как счётчики
    pub fn is_monetary(&self) -> bool {
        !matches!(self, ReportKind::AppointmentEfficiency)
    }
}

/// `faturamento-mensal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub mes: String,
    #[serde(rename = "Faturamento", default)]
    pub faturamento: f64,
}

/// `vendas-por-metodo` and `eficiencia-agendamentos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

/// `top-clientes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopClient {
    pub name: String,
    #[serde(rename = "Total Gasto", default)]
    pub total_gasto: f64,
}

/// `fluxo-caixa-futuro`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub mes: String,
    #[serde(rename = "Valor a Receber", default)]
    pub valor_a_receber: f64,
}

/// Строка горизонтальной диаграммы
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    /// Ширина столбика, 0..=100
    pub width: f64,
}

/// Масштабирует серию относительно максимума
pub fn to_bars<T>(
    items: &[T],
    label: impl Fn(&T) -> String,
    value: impl Fn(&T) -> f64,
) -> Vec<BarRow> {
    let values: Vec<f64> = items.iter().map(&value).collect();
    let widths = bar_widths(&values);
    items
        .iter()
        .zip(values)
        .zip(widths)
        .map(|((item, value), width)| BarRow {
            label: label(item),
            value,
            width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_series() {
        let revenue: Vec<RevenuePoint> =
            serde_json::from_str(r#"[{"mes":"Jan/25","Faturamento":1500},{"mes":"Fev/25","Faturamento":3000}]"#)
                .unwrap();
        let bars = to_bars(&revenue, |p| p.mes.clone(), |p| p.faturamento);
        assert_eq!(bars[0].width, 50.0);
        assert_eq!(bars[1].width, 100.0);
        assert_eq!(bars[1].label, "Fev/25");

        let top: Vec<TopClient> =
            serde_json::from_str(r#"[{"name":"Maria","Total Gasto":980.5}]"#).unwrap();
        assert_eq!(top[0].total_gasto, 980.5);

        let flow: Vec<CashFlowPoint> =
            serde_json::from_str(r#"[{"mes":"Abr/25","Valor a Receber":400}]"#).unwrap();
        assert_eq!(flow[0].valor_a_receber, 400.0);
    }

    #[test]
    fn test_all_zero_series() {
        let items = vec![
            NamedValue { name: "Compareceu".into(), value: 0.0 },
            NamedValue { name: "Faltou".into(), value: 0.0 },
        ];
        let bars = to_bars(&items, |n| n.name.clone(), |n| n.value);
        assert!(bars.iter().all(|b| b.width == 0.0));
    }

    #[test]
    fn test_paths() {
        for kind in ReportKind::ALL {
            assert!(kind.api_path().starts_with("/relatorios/"));
        }
        assert!(!ReportKind::AppointmentEfficiency.is_monetary());
    }
}
