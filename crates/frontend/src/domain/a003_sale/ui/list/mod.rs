use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::{Badge, BadgeVariant, Button};
use crate::shared::date_utils::format_date;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use contracts::domain::a003_sale::{Sale, SaleStatus};
use contracts::domain::common::AggregateRoot;
use contracts::shared::aggregation::sum_by_category;
use contracts::shared::api_error::ApiError;
use contracts::shared::money::format_currency;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_sales(api: &ApiClient) -> Result<Vec<Sale>, ApiError> {
    api.get(&Sale::api_path()).await
}

/// Итог по статусу для карточек над таблицей
fn status_total(sales: &[Sale], status: SaleStatus) -> (f64, usize) {
    sum_by_category(sales, |s| s.status, |s| s.valor_total)
        .into_iter()
        .find(|t| t.key == status)
        .map(|t| (t.total, t.count))
        .unwrap_or((0.0, 0))
}

fn payment_label(sale: &Sale) -> String {
    let Some(payment) = &sale.pagamento else {
        return "--".to_string();
    };
    match (payment.metodo_pagamento, payment.parcelas) {
        (Some(m), Some(n)) if n > 1 => format!("{} ({}x)", m.label(), n),
        (Some(m), _) => m.label().to_string(),
        (None, _) => "--".to_string(),
    }
}

#[component]
fn StatusCard(
    sales: ReadSignal<Vec<Sale>>,
    status: SaleStatus,
    label: &'static str,
    icon_name: &'static str,
    tone: CardTone,
) -> impl IntoView {
    let totals = Memo::new(move |_| sales.with(|all| status_total(all, status)));
    view! {
        <StatCard
            label=label.to_string()
            icon_name=icon_name
            value=Signal::derive(move || Some(format_currency(Some(totals.get().0))))
            subtitle=Signal::derive(move || Some(format!("{} vendas", totals.get().1)))
            tone=tone
        />
    }
}

#[component]
pub fn SaleList() -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let (items, set_items) = signal::<Vec<Sale>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let api = session.client();
        spawn_local(async move {
            match fetch_sales(&api).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar vendas."),
                )),
            }
        });
    };

    fetch();

    view! {
        <PageFrame page_id="a003_sale--list" category=PAGE_CAT_LIST>
            <PageHeader title="Histórico de Vendas">
                <Button on_click=Callback::new(move |_| ctx.navigate(AppRoute::SaleNew))>
                    {icon("plus")}
                    "Nova venda"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| fetch())>
                    {icon("refresh")}
                    "Atualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatusCard sales=items status=SaleStatus::Completed label="Concluídas" icon_name="check" tone=CardTone::Good />
                    <StatusCard sales=items status=SaleStatus::Pending label="Pendentes" icon_name="alert" tone=CardTone::Warning />
                    <StatusCard sales=items status=SaleStatus::Cancelled label="Canceladas" icon_name="cancel" tone=CardTone::Neutral />
                </div>

                <ErrorBox message=error />

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Data"</th>
                                <th class="table__header-cell">"Cliente"</th>
                                <th class="table__header-cell">"Itens"</th>
                                <th class="table__header-cell">"Pagamento"</th>
                                <th class="table__header-cell text-right">"Total"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|s| s.id.clone()
                                children=move |sale| {
                                    let route = AppRoute::SaleDetails(sale.id.value().to_string());
                                    let total = sale.valor_total;
                                    view! {
                                        <tr class="table__row table__row--clickable" on:click=move |_| ctx.navigate(route.clone())>
                                            <td class="table__cell">{format_date(&sale.data_venda)}</td>
                                            <td class="table__cell">{sale.cliente.full_name.clone()}</td>
                                            <td class="table__cell">{sale.produtos.len()}</td>
                                            <td class="table__cell">{payment_label(&sale)}</td>
                                            <TableCellMoney value=Signal::derive(move || Some(total)) bold=true />
                                            <td class="table__cell">
                                                <Badge variant=sale.status.badge_variant()>{sale.status.label()}</Badge>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(json: &str) -> Sale {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_totals_per_status() {
        let sales = vec![
            sale(r#"{"_id":"1","cliente":{"fullName":"Ana"},"valorTotal":100,"status":"Concluído"}"#),
            sale(r#"{"_id":"2","cliente":{"fullName":"Bia"},"valorTotal":50.5,"status":"Pendente"}"#),
            sale(r#"{"_id":"3","cliente":{"fullName":"Caio"},"valorTotal":20,"status":"Concluído"}"#),
        ];
        assert_eq!(status_total(&sales, SaleStatus::Completed), (120.0, 2));
        assert_eq!(status_total(&sales, SaleStatus::Pending), (50.5, 1));
        assert_eq!(status_total(&sales, SaleStatus::Cancelled), (0.0, 0));
    }

    #[test]
    fn test_payment_label_shows_installments() {
        let s = sale(r#"{"_id":"1","cliente":{"fullName":"Ana"},"valorTotal":300,"pagamento":{"valorEntrada":0,"valorRestante":300,"metodoPagamento":"Cartão de Crédito","parcelas":3}}"#);
        assert_eq!(payment_label(&s), "Cartão de Crédito (3x)");
    }
}
