//! Маршруты консоли и guard, который вычисляется до построения страницы.

use super::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    Reports,
    Appointments,
    Clients,
    Sales,
    SaleNew,
    SaleDetails(String),
    SaleEdit(String),
    Invoices,
    InvoiceNew,
    Products,
    CashRegister,
    ServiceOrders,
    ServiceOrderDetails(String),
}

/// Результат проверки доступа к маршруту
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Можно строить страницу
    Render(AppRoute),
    /// Нужно перейти на другой маршрут
    Redirect(AppRoute),
}

impl AppRoute {
    /// Разбирает путь URL. Неизвестные пути ведут на дашборд.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppRoute::Dashboard,
            ["login"] => AppRoute::Login,
            ["relatorios"] => AppRoute::Reports,
            ["agendamentos"] => AppRoute::Appointments,
            ["clientes"] => AppRoute::Clients,
            ["vendas"] => AppRoute::Sales,
            ["vendas", "nova"] => AppRoute::SaleNew,
            ["vendas", id] => AppRoute::SaleDetails(id.to_string()),
            ["vendas", id, "editar"] => AppRoute::SaleEdit(id.to_string()),
            ["boletos"] => AppRoute::Invoices,
            ["boletos", "novo"] => AppRoute::InvoiceNew,
            ["produtos"] => AppRoute::Products,
            ["caixa"] => AppRoute::CashRegister,
            ["ordens-servico"] => AppRoute::ServiceOrders,
            ["ordens-servico", id] => AppRoute::ServiceOrderDetails(id.to_string()),
            _ => AppRoute::Dashboard,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => "/login".to_string(),
            AppRoute::Dashboard => "/".to_string(),
            AppRoute::Reports => "/relatorios".to_string(),
            AppRoute::Appointments => "/agendamentos".to_string(),
            AppRoute::Clients => "/clientes".to_string(),
            AppRoute::Sales => "/vendas".to_string(),
            AppRoute::SaleNew => "/vendas/nova".to_string(),
            AppRoute::SaleDetails(id) => format!("/vendas/{}", id),
            AppRoute::SaleEdit(id) => format!("/vendas/{}/editar", id),
            AppRoute::Invoices => "/boletos".to_string(),
            AppRoute::InvoiceNew => "/boletos/novo".to_string(),
            AppRoute::Products => "/produtos".to_string(),
            AppRoute::CashRegister => "/caixa".to_string(),
            AppRoute::ServiceOrders => "/ordens-servico".to_string(),
            AppRoute::ServiceOrderDetails(id) => format!("/ordens-servico/{}", id),
        }
    }

    /// Заголовок страницы
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Login",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Reports => "Relatórios",
            AppRoute::Appointments => "Agendamentos",
            AppRoute::Clients => "Clientes",
            AppRoute::Sales => "Histórico de Vendas",
            AppRoute::SaleNew => "Registrar Nova Venda",
            AppRoute::SaleDetails(_) => "Detalhes da Venda",
            AppRoute::SaleEdit(_) => "Editar Venda",
            AppRoute::Invoices => "Gestão de Boletos",
            AppRoute::InvoiceNew => "Gerar Parcelamento",
            AppRoute::Products => "Produtos",
            AppRoute::CashRegister => "Caixa",
            AppRoute::ServiceOrders => "Ordens de Serviço",
            AppRoute::ServiceOrderDetails(_) => "Detalhes da O.S.",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, AppRoute::Login)
    }

    /// Пункт меню, который подсвечивается для маршрута
    pub fn section(&self) -> AppRoute {
        match self {
            AppRoute::SaleNew | AppRoute::SaleDetails(_) | AppRoute::SaleEdit(_) => AppRoute::Sales,
            AppRoute::InvoiceNew => AppRoute::Invoices,
            AppRoute::ServiceOrderDetails(_) => AppRoute::ServiceOrders,
            other => other.clone(),
        }
    }
}

/// Проверка доступа: выполняется до создания представления
pub fn guard(session: &Session, route: AppRoute) -> GuardOutcome {
    match (session.is_authenticated(), route.requires_auth()) {
        (false, true) => GuardOutcome::Redirect(AppRoute::Login),
        (true, false) => GuardOutcome::Redirect(AppRoute::Dashboard),
        _ => GuardOutcome::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::UserInfo;

    fn signed_in() -> Session {
        let mut s = Session::anonymous();
        s.sign_in(
            "tok".into(),
            UserInfo {
                id: "1".into(),
                nome: "Ana".into(),
                email: String::new(),
            },
        );
        s
    }

    #[test]
    fn test_paths_round_trip() {
        let routes = vec![
            AppRoute::Login,
            AppRoute::Dashboard,
            AppRoute::Reports,
            AppRoute::Appointments,
            AppRoute::Clients,
            AppRoute::Sales,
            AppRoute::SaleNew,
            AppRoute::SaleDetails("abc".into()),
            AppRoute::SaleEdit("abc".into()),
            AppRoute::Invoices,
            AppRoute::InvoiceNew,
            AppRoute::Products,
            AppRoute::CashRegister,
            AppRoute::ServiceOrders,
            AppRoute::ServiceOrderDetails("os1".into()),
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_from_path_tolerates_noise() {
        assert_eq!(AppRoute::from_path("/clientes/"), AppRoute::Clients);
        assert_eq!(AppRoute::from_path("/boletos?status=Pagos"), AppRoute::Invoices);
        assert_eq!(AppRoute::from_path("/nao-existe/1/2"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
    }

    #[test]
    fn test_guard_redirects_anonymous_to_login() {
        let anon = Session::anonymous();
        assert_eq!(
            guard(&anon, AppRoute::Invoices),
            GuardOutcome::Redirect(AppRoute::Login)
        );
        assert_eq!(
            guard(&anon, AppRoute::Login),
            GuardOutcome::Render(AppRoute::Login)
        );
    }

    #[test]
    fn test_guard_for_signed_in_user() {
        let session = signed_in();
        assert_eq!(
            guard(&session, AppRoute::SaleDetails("1".into())),
            GuardOutcome::Render(AppRoute::SaleDetails("1".into()))
        );
        assert_eq!(
            guard(&session, AppRoute::Login),
            GuardOutcome::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn test_section_of_nested_routes() {
        assert_eq!(AppRoute::SaleEdit("1".into()).section(), AppRoute::Sales);
        assert_eq!(AppRoute::InvoiceNew.section(), AppRoute::Invoices);
        assert_eq!(AppRoute::Clients.section(), AppRoute::Clients);
    }
}
