use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeVariant, Button, Select};
use crate::shared::date_utils::format_date_opt;
use crate::shared::http::{item_path, ApiClient};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use contracts::domain::a003_sale::StatusPatch;
use contracts::domain::a007_service_order::{ServiceOrder, ServiceOrderStatus};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_order(api: &ApiClient, id: &str) -> Result<ServiceOrder, ApiError> {
    api.get(&item_path(&ServiceOrder::api_path(), id)).await
}

async fn update_status(
    api: &ApiClient,
    id: &str,
    status: ServiceOrderStatus,
) -> Result<(), ApiError> {
    let path = format!("{}/status", item_path(&ServiceOrder::api_path(), id));
    api.patch_unit(&path, &StatusPatch { status }).await
}

fn prescription_rows(rows: [(&'static str, Option<&str>); 3]) -> impl IntoView {
    rows.into_iter()
        .map(|(label, value)| {
            let value = value.unwrap_or("--").to_string();
            view! {
                <div class="prescription__cell">
                    <span class="prescription__label">{label}</span>
                    <span class="prescription__value">{value}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn ServiceOrderDetails(id: String) -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let order = RwSignal::new(None::<ServiceOrder>);
    let error = RwSignal::new(None::<String>);
    let id = StoredValue::new(id);

    let fetch = move || {
        let api = session.client();
        let id = id.get_value();
        spawn_local(async move {
            match fetch_order(&api, &id).await {
                Ok(os) => order.set(Some(os)),
                Err(e) => error.set(Some(
                    session.error_message(&e, "Erro ao carregar ordem de serviço."),
                )),
            }
        });
    };

    let change_status = move |label: String| {
        let Some(status) = ServiceOrderStatus::from_label(&label) else { return };
        let api = session.client();
        let id = id.get_value();
        spawn_local(async move {
            match update_status(&api, &id, status).await {
                Ok(()) => {
                    log::info!("service order {} -> {}", id, status.label());
                    fetch();
                }
                Err(e) => error.set(Some(
                    session.error_message(&e, "Erro ao atualizar status."),
                )),
            }
        });
    };

    fetch();

    let statuses: Vec<(String, String)> = ServiceOrderStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect();

    view! {
        <PageFrame page_id="a007_service_order--detail" category=PAGE_CAT_DETAIL>
            <PageHeader
                title=String::from("Ordem de Serviço")
                subtitle=Signal::derive(move || order.with(|o| o.as_ref().map(ServiceOrder::number_label)))
            >
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(AppRoute::ServiceOrders))>
                    {icon("arrow-left")}
                    "Voltar"
                </Button>
                {move || order.with(|o| o.as_ref().and_then(|o| o.sale_id().map(str::to_string))).map(|sale_id| view! {
                    <Button variant="ghost" on_click=Callback::new(move |_| ctx.navigate(AppRoute::SaleDetails(sale_id.clone())))>
                        {icon("cart")}
                        "Ver venda"
                    </Button>
                })}
            </PageHeader>

            <div class="page__content">
                <ErrorBox message=error />

                {move || order.get().map(|os| {
                    let is_final = os.status.is_final();
                    view! {
                        <div class="details-grid">
                            <div class="details-card">
                                <div class="details-card__row"><span>"Cliente"</span><strong>{os.cliente.full_name.clone()}</strong></div>
                                <div class="details-card__row"><span>"Telefone"</span><span>{os.cliente.phone.clone().unwrap_or_else(|| "--".to_string())}</span></div>
                                <div class="details-card__row"><span>"Abertura"</span><span>{format_date_opt(os.created_at.as_deref())}</span></div>
                                <div class="details-card__row"><span>"Previsão de entrega"</span><span>{format_date_opt(os.previsao_entrega.as_deref())}</span></div>
                                <div class="details-card__row"><span>"Entregue em"</span><span>{format_date_opt(os.data_entrega.as_deref())}</span></div>
                                <div class="details-card__row">
                                    <span>"Status"</span>
                                    <Badge variant=os.status.badge_variant()>{os.status.label()}</Badge>
                                </div>
                                <Select
                                    label="Alterar status"
                                    options=statuses.clone()
                                    disabled=is_final
                                    value=os.status.label().to_string()
                                    on_change=Callback::new(change_status)
                                />
                            </div>

                            <div class="details-card prescription">
                                <h3 class="details-card__title">"Receita"</h3>
                                <div class="prescription__eye">
                                    <span class="prescription__eye-label">"OD"</span>
                                    {prescription_rows(os.receita.right_eye())}
                                </div>
                                <div class="prescription__eye">
                                    <span class="prescription__eye-label">"OE"</span>
                                    {prescription_rows(os.receita.left_eye())}
                                </div>
                                <div class="prescription__eye">
                                    {prescription_rows(os.receita.extras())}
                                </div>
                            </div>
                        </div>

                        <div class="details-card">
                            <h3 class="details-card__title">"Produtos / Serviços"</h3>
                            <ul class="details-card__list">
                                {os.produtos_servico.iter().map(|p| view! { <li>{p.nome.clone()}</li> }).collect_view()}
                            </ul>
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
