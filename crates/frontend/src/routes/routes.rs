use crate::dashboards::d400_dashboard::ui::DashboardPage;
use crate::dashboards::d401_reports::ui::ReportsPage;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_sale::ui::details::SaleDetails;
use crate::domain::a003_sale::ui::form::SaleForm;
use crate::domain::a003_sale::ui::list::SaleList;
use crate::domain::a004_invoice::ui::installment_plan::InstallmentPlanForm;
use crate::domain::a004_invoice::ui::list::InvoiceList;
use crate::domain::a005_appointment::ui::list::AppointmentList;
use crate::domain::a006_cash_register::ui::list::CashRegisterPage;
use crate::domain::a007_service_order::ui::details::ServiceOrderDetails;
use crate::domain::a007_service_order::ui::list::ServiceOrderList;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use contracts::system::routing::{guard, AppRoute, GuardOutcome};
use leptos::prelude::*;

/// Что показывать на верхнем уровне
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Console,
    /// Ждём редиректа
    Pending,
}

fn screen_for(outcome: &GuardOutcome) -> Screen {
    match outcome {
        GuardOutcome::Render(AppRoute::Login) => Screen::Login,
        GuardOutcome::Render(_) => Screen::Console,
        GuardOutcome::Redirect(_) => Screen::Pending,
    }
}

fn render_page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        AppRoute::Appointments => view! { <AppointmentList /> }.into_any(),
        AppRoute::Clients => view! { <ClientList /> }.into_any(),
        AppRoute::Products => view! { <ProductList /> }.into_any(),
        AppRoute::Sales => view! { <SaleList /> }.into_any(),
        AppRoute::SaleNew => view! { <SaleForm id=None /> }.into_any(),
        AppRoute::SaleEdit(id) => view! { <SaleForm id=Some(id) /> }.into_any(),
        AppRoute::SaleDetails(id) => view! { <SaleDetails id=id /> }.into_any(),
        AppRoute::Invoices => view! { <InvoiceList /> }.into_any(),
        AppRoute::InvoiceNew => view! { <InstallmentPlanForm /> }.into_any(),
        AppRoute::CashRegister => view! { <CashRegisterPage /> }.into_any(),
        AppRoute::ServiceOrders => view! { <ServiceOrderList /> }.into_any(),
        AppRoute::ServiceOrderDetails(id) => view! { <ServiceOrderDetails id=id /> }.into_any(),
        AppRoute::Login => ().into_any(),
    }
}

#[component]
fn MainLayout(outcome: Memo<GuardOutcome>) -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                (move || match outcome.get() {
                    GuardOutcome::Render(route) => render_page(route),
                    GuardOutcome::Redirect(_) => ().into_any(),
                })
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    ctx.init_router_integration();

    // guard вычисляется до построения страницы
    let outcome = Memo::new(move |_| {
        let route = ctx.route.get();
        session.session.with(|s| guard(s, route))
    });
    let screen = Memo::new(move |_| outcome.with(screen_for));

    Effect::new(move |_| {
        if let GuardOutcome::Redirect(to) = outcome.get() {
            ctx.redirect(to);
        }
    });

    move || match screen.get() {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Console => view! { <MainLayout outcome=outcome /> }.into_any(),
        Screen::Pending => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_selection() {
        assert_eq!(
            screen_for(&GuardOutcome::Render(AppRoute::Login)),
            Screen::Login
        );
        assert_eq!(
            screen_for(&GuardOutcome::Render(AppRoute::Invoices)),
            Screen::Console
        );
        assert_eq!(
            screen_for(&GuardOutcome::Redirect(AppRoute::Login)),
            Screen::Pending
        );
    }
}
