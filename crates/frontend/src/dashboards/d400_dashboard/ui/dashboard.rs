use crate::dashboards::d400_dashboard::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;
use contracts::dashboards::d400_dashboard::DashboardStats;
use contracts::shared::money::{format_currency, format_integer};
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn count_text(value: u32) -> String {
    format_integer(i64::from(value))
}

/// Main dashboard: sales, invoices, appointments and birthdays
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let (data, set_data) = signal(None::<DashboardStats>);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let client = session.client();
        spawn_local(async move {
            match api::get_stats(&client).await {
                Ok(stats) => {
                    set_data.set(Some(stats));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar o dashboard."),
                )),
            }
        });
    };

    load();

    let metric = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    let greeting =
        Signal::derive(move || session.user_name().map(|name| format!("Olá, {}", name)));

    view! {
        <PageFrame page_id="d400_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle=greeting>
                <Button variant="secondary" on_click=Callback::new(move |_| load())>
                    {icon("refresh")}
                    "Atualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox message=error />

                <div class="stat-grid">
                    <StatCard
                        label="Vendas hoje".to_string()
                        icon_name="cart"
                        value=metric(|d| format_currency(Some(d.total_vendas_dia)))
                    />
                    <StatCard
                        label="Vendas no mês".to_string()
                        icon_name="trending-up"
                        value=metric(|d| format_currency(Some(d.total_vendas_mes)))
                    />
                    <StatCard
                        label="Boletos vencidos".to_string()
                        icon_name="alert"
                        value=metric(|d| count_text(d.boletos_vencidos))
                        tone=Signal::derive(move || data.with(|d| {
                            if d.as_ref().is_some_and(DashboardStats::has_alerts) {
                                CardTone::Bad
                            } else {
                                CardTone::Neutral
                            }
                        }))
                    />
                    <StatCard
                        label="Boletos próximos".to_string()
                        icon_name="invoices"
                        value=metric(|d| count_text(d.boletos_proximos))
                        subtitle=Signal::derive(|| Some("Vencem nos próximos dias".to_string()))
                        tone=Signal::derive(move || data.with(|d| {
                            CardTone::alert_if(d.as_ref().map_or(0, |d| d.boletos_proximos), CardTone::Warning)
                        }))
                    />
                    <StatCard
                        label="Próximos agendamentos".to_string()
                        icon_name="calendar"
                        value=metric(|d| count_text(d.agendamentos_proximos))
                    />
                </div>

                <div class="dashboard__row">
                    <section class="card birthdays">
                        <h3 class="card__title">{icon("gift")} "Aniversariantes do mês"</h3>
                        {move || {
                            let list = data.with(|d| d.as_ref().map(DashboardStats::birthdays_sorted).unwrap_or_default());
                            if list.is_empty() {
                                return view! { <p class="card__empty">"Nenhum aniversariante este mês."</p> }.into_any();
                            }
                            view! {
                                <ul class="birthdays__list">
                                    {list.into_iter().map(|b| view! {
                                        <li class="birthdays__item">
                                            <span class="birthdays__day">{format!("{:02}", b.dia)}</span>
                                            <span>{b.nome}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }}
                    </section>

                    <section class="card quick-actions">
                        <h3 class="card__title">"Atalhos"</h3>
                        <Button on_click=Callback::new(move |_| ctx.navigate(AppRoute::SaleNew))>
                            {icon("cart")} "Nova venda"
                        </Button>
                        <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(AppRoute::Appointments))>
                            {icon("calendar")} "Agendamentos"
                        </Button>
                        <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(AppRoute::Invoices))>
                            {icon("invoices")} "Boletos"
                        </Button>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text_groups_thousands() {
        assert_eq!(count_text(3), "3");
        assert_eq!(count_text(1250), "1.250");
    }
}
