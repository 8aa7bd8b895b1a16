use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sales total for today
    #[serde(rename = "totalVendasDia", default)]
    pub total_vendas_dia: f64,
    /// Sales total for the current month
    #[serde(rename = "totalVendasMes", default)]
    pub total_vendas_mes: f64,
    /// Number of overdue invoices
    #[serde(rename = "boletosVencidos", default)]
    pub boletos_vencidos: u32,
    /// Invoices due within the next days
    #[serde(rename = "boletosProximos", default)]
    pub boletos_proximos: u32,
    #[serde(rename = "agendamentosProximos", default)]
    pub agendamentos_proximos: u32,
    #[serde(rename = "aniversariantesMes", default)]
    pub aniversariantes_mes: Vec<BirthdayEntry>,
}

/// Client with a birthday this month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayEntry {
    pub nome: String,
    pub dia: u32,
}

impl DashboardStats {
    /// Именинники месяца, отсортированные по дню
    pub fn birthdays_sorted(&self) -> Vec<BirthdayEntry> {
        let mut list = self.aniversariantes_mes.clone();
        list.sort_by(|a, b| a.dia.cmp(&b.dia).then_with(|| a.nome.cmp(&b.nome)));
        list
    }

    /// Есть ли что-то, требующее внимания (просрочки)
    pub fn has_alerts(&self) -> bool {
        self.boletos_vencidos > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dashboard() {
        let raw = r#"{
            "totalVendasDia": 350.5,
            "totalVendasMes": 12000,
            "boletosVencidos": 2,
            "boletosProximos": 5,
            "agendamentosProximos": 3,
            "aniversariantesMes": [{"nome": "Bruno", "dia": 21}, {"nome": "Ana", "dia": 4}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_vendas_mes, 12000.0);
        assert!(stats.has_alerts());
        let names: Vec<_> = stats.birthdays_sorted().into_iter().map(|b| b.nome).collect();
        assert_eq!(names, ["Ana", "Bruno"]);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let stats: DashboardStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, DashboardStats::default());
        assert!(!stats.has_alerts());
    }
}
