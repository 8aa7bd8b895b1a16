use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Badge, BadgeVariant, Select};
use crate::shared::date_utils::format_date_opt;
use crate::shared::http::ApiClient;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use contracts::domain::a007_service_order::{ServiceOrder, ServiceOrderStatus};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::ListQuery;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_orders(api: &ApiClient, query: &ListQuery) -> Result<Vec<ServiceOrder>, ApiError> {
    api.get_with_query(&ServiceOrder::api_path(), query).await
}

/// Фильтр статуса: пустое значение - все
fn status_query(value: &str) -> ListQuery {
    ListQuery::new().with_status(ServiceOrderStatus::from_label(value).map(|s| s.label()))
}

#[component]
pub fn ServiceOrderList() -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let (items, set_items) = signal::<Vec<ServiceOrder>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let status = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let fetch = move || {
        let api = session.client();
        let query = status_query(&status.get_untracked());
        spawn_local(async move {
            match fetch_orders(&api, &query).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar ordens de serviço."),
                )),
            }
        });
    };

    let statuses: Vec<(String, String)> = ServiceOrderStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect();

    let visible = move || {
        let term = search.get();
        items.with(|all| {
            all.iter()
                .filter(|os| os.matches(&term))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    fetch();

    view! {
        <PageFrame page_id="a007_service_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Ordens de Serviço">
                {()}
            </PageHeader>

            <div class="page__content">
                <div class="filter-bar">
                    <SearchInput
                        placeholder="Buscar por número ou cliente"
                        on_search=Callback::new(move |term| search.set(term))
                    />
                    <Select
                        placeholder="Todos os status"
                        options=statuses
                        value=status
                        on_change=Callback::new(move |v| {
                            status.set(v);
                            fetch();
                        })
                    />
                </div>

                <ErrorBox message=error />

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Nº"</th>
                                <th class="table__header-cell">"Cliente"</th>
                                <th class="table__header-cell">"Abertura"</th>
                                <th class="table__header-cell">"Previsão"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|os| (os.id.clone(), os.status)
                                children=move |os| {
                                    let route = AppRoute::ServiceOrderDetails(os.id.value().to_string());
                                    view! {
                                        <tr class="table__row table__row--clickable" on:click=move |_| ctx.navigate(route.clone())>
                                            <td class="table__cell">{os.number_label()}</td>
                                            <td class="table__cell">{os.cliente.full_name.clone()}</td>
                                            <td class="table__cell">{format_date_opt(os.created_at.as_deref())}</td>
                                            <td class="table__cell">{format_date_opt(os.previsao_entrega.as_deref())}</td>
                                            <td class="table__cell">
                                                <Badge variant=os.status.badge_variant()>{os.status.label()}</Badge>
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

    #[test]
    fn test_status_filter() {
        assert_eq!(status_query("").status, None);
        assert_eq!(status_query("Em Produção").status.as_deref(), Some("Em Produção"));
        assert_eq!(status_query("???").status, None);
    }
}
