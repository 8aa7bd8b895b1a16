use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::{Badge, BadgeVariant, Button};
use crate::shared::date_utils::{format_date, today};
use crate::shared::dialogs::confirm;
use crate::shared::http::{item_path, ApiClient};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use contracts::domain::a004_invoice::{
    Invoice, InvoiceMonthGroup, InvoiceStatusFilter, MarkPaidRequest,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::ListQuery;
use contracts::shared::money::{format_currency, format_decimal};
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_groups(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Vec<InvoiceMonthGroup>, ApiError> {
    api.get_with_query(&Invoice::api_path(), query).await
}

async fn mark_paid(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    let path = format!("{}/status", item_path(&Invoice::api_path(), id));
    api.patch_unit(&path, &MarkPaidRequest::paid()).await
}

fn list_query(filter: InvoiceStatusFilter, search: &str) -> ListQuery {
    ListQuery::new()
        .with_search(search)
        .with_status(Some(filter.as_query()))
}

#[component]
fn MonthGroup(group: InvoiceMonthGroup, on_pay: Callback<Invoice>) -> impl IntoView {
    let today = today();
    let overdue = group.overdue_count(today);
    let progress = group.progress_percent();

    view! {
        <section class="month-group">
            <header class="month-group__header">
                <h3 class="month-group__title">{group.month_label()}</h3>
                <div class="month-group__totals">
                    <span>"A receber: " <strong>{format_currency(Some(group.remaining()))}</strong></span>
                    <span>"Total do mês: " {format_currency(Some(group.valor_total_mes))}</span>
                    {(overdue > 0).then(|| view! {
                        <Badge variant="error">{format!("{} em atraso", overdue)}</Badge>
                    })}
                </div>
                <div class="progress" title=format!("{}% pago", format_decimal(progress, 0))>
                    <div class="progress__bar" style=format!("width: {:.1}%", progress)></div>
                </div>
            </header>

            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Cliente"</th>
                        <th class="table__header-cell">"Descrição"</th>
                        <th class="table__header-cell">"Vencimento"</th>
                        <th class="table__header-cell text-right">"Valor"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {group.boletos.into_iter().map(|invoice| {
                        let is_overdue = invoice.is_overdue(today);
                        let value = invoice.parcel_value;
                        let status_view = if is_overdue {
                            view! { <Badge variant="error">"Atrasado"</Badge> }.into_any()
                        } else {
                            view! { <Badge variant=invoice.status.badge_variant()>{invoice.status.label()}</Badge> }.into_any()
                        };
                        let pay_button = (!invoice.is_paid()).then(|| {
                            let for_pay = invoice.clone();
                            view! {
                                <Button variant="secondary" size="sm" on_click=Callback::new(move |_| on_pay.run(for_pay.clone()))>
                                    {icon("check")}
                                    "Dar baixa"
                                </Button>
                            }
                        });
                        view! {
                            <tr class="table__row" class:table__row--overdue=is_overdue>
                                <td class="table__cell">{invoice.cliente_info.full_name.clone()}</td>
                                <td class="table__cell">{invoice.description.clone()}</td>
                                <td class="table__cell">{format_date(&invoice.due_date)}</td>
                                <TableCellMoney value=Signal::derive(move || Some(value)) />
                                <td class="table__cell">{status_view}</td>
                                <td class="table__cell table__cell--actions">{pay_button}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let (groups, set_groups) = signal::<Vec<InvoiceMonthGroup>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let filter = RwSignal::new(InvoiceStatusFilter::default());
    let search = RwSignal::new(String::new());

    let fetch = move || {
        let api = session.client();
        let query = list_query(filter.get_untracked(), &search.get_untracked());
        spawn_local(async move {
            match fetch_groups(&api, &query).await {
                Ok(v) => {
                    set_groups.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar boletos."),
                )),
            }
        });
    };

    let handle_pay = Callback::new(move |invoice: Invoice| {
        let message = format!(
            "Confirmar pagamento de {} ({})?",
            format_currency(Some(invoice.parcel_value)),
            invoice.cliente_info.full_name
        );
        if !confirm(&message) {
            return;
        }
        let api = session.client();
        spawn_local(async move {
            match mark_paid(&api, invoice.id.value()).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao dar baixa no boleto."),
                )),
            }
        });
    });

    fetch();

    view! {
        <PageFrame page_id="a004_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title="Controle de Boletos">
                <Button on_click=Callback::new(move |_| ctx.navigate(AppRoute::InvoiceNew))>
                    {icon("plus")}
                    "Novo parcelamento"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="tabs">
                    {InvoiceStatusFilter::ALL.into_iter().map(|f| view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || filter.get() == f
                            on:click=move |_| {
                                filter.set(f);
                                fetch();
                            }
                        >
                            {f.label()}
                        </button>
                    }).collect_view()}
                </div>

                <SearchInput
                    placeholder="Buscar por cliente"
                    on_search=Callback::new(move |term| {
                        search.set(term);
                        fetch();
                    })
                />

                <ErrorBox message=error />

                {move || {
                    let all = groups.get();
                    if all.is_empty() {
                        return view! { <p class="page__empty">"Nenhum boleto encontrado."</p> }.into_any();
                    }
                    all.into_iter()
                        .map(|group| view! { <MonthGroup group=group on_pay=handle_pay /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_goes_to_status_param() {
        let q = list_query(InvoiceStatusFilter::Atrasados, "  ");
        assert_eq!(q.status.as_deref(), Some("Atrasados"));
        assert_eq!(q.search, None);
    }
}
