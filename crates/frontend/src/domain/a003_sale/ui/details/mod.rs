use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::{Badge, BadgeVariant, Button};
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::confirm;
use crate::shared::http::{item_path, ApiClient};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use contracts::domain::a003_sale::{Sale, SaleStatus, StatusPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::money::format_currency;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_sale(api: &ApiClient, id: &str) -> Result<Sale, ApiError> {
    api.get(&item_path(&Sale::api_path(), id)).await
}

async fn complete_sale(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    let path = format!("{}/status", item_path(&Sale::api_path(), id));
    api.patch_unit(&path, &StatusPatch { status: SaleStatus::Completed })
        .await
}

async fn delete_sale(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&item_path(&Sale::api_path(), id)).await
}

#[component]
pub fn SaleDetails(id: String) -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let sale = RwSignal::new(None::<Sale>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let id = StoredValue::new(id);

    let fetch = move || {
        let api = session.client();
        let id = id.get_value();
        spawn_local(async move {
            match fetch_sale(&api, &id).await {
                Ok(s) => sale.set(Some(s)),
                Err(e) => error.set(Some(session.error_message(&e, "Erro ao carregar venda."))),
            }
        });
    };

    let handle_complete = move || {
        let api = session.client();
        let id = id.get_value();
        busy.set(true);
        spawn_local(async move {
            let result = complete_sale(&api, &id).await;
            busy.set(false);
            match result {
                Ok(()) => fetch(),
                Err(e) => error.set(Some(
                    session.error_message(&e, "Erro ao atualizar status da venda."),
                )),
            }
        });
    };

    let handle_delete = move || {
        if !confirm("Excluir esta venda? Esta ação não pode ser desfeita.") {
            return;
        }
        let api = session.client();
        let id = id.get_value();
        spawn_local(async move {
            match delete_sale(&api, &id).await {
                Ok(()) => ctx.navigate(AppRoute::Sales),
                Err(e) => error.set(Some(session.error_message(&e, "Erro ao excluir venda."))),
            }
        });
    };

    fetch();

    let can_complete = move || sale.with(|s| s.as_ref().is_some_and(Sale::can_complete));

    view! {
        <PageFrame page_id="a003_sale--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Detalhes da Venda">
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(AppRoute::Sales))>
                    {icon("arrow-left")}
                    "Voltar"
                </Button>
                <Show when=can_complete>
                    <Button disabled=busy on_click=Callback::new(move |_| handle_complete())>
                        {icon("check")}
                        "Marcar como concluída"
                    </Button>
                </Show>
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(AppRoute::SaleEdit(id.get_value())))>
                    {icon("edit")}
                    "Editar"
                </Button>
                <Button variant="danger" on_click=Callback::new(move |_| handle_delete())>
                    {icon("delete")}
                    "Excluir"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox message=error />

                {move || sale.get().map(|s| {
                    let payment = s.pagamento.clone();
                    let (total, items_total) = (s.valor_total, s.items_total());
                    view! {
                        <div class="details-grid">
                            <div class="details-card">
                                <div class="details-card__row"><span>"Cliente"</span><strong>{s.cliente.full_name.clone()}</strong></div>
                                <div class="details-card__row"><span>"Data"</span><span>{format_date(&s.data_venda)}</span></div>
                                <div class="details-card__row"><span>"Vendedor"</span><span>{s.vendedor.as_ref().map(|v| v.nome.clone()).unwrap_or_else(|| "--".to_string())}</span></div>
                                <div class="details-card__row">
                                    <span>"Status"</span>
                                    <Badge variant=s.status.badge_variant()>{s.status.label()}</Badge>
                                </div>
                            </div>

                            <div class="details-card">
                                {match payment {
                                    Some(p) => view! {
                                        <div class="details-card__row"><span>"Método"</span><span>{p.metodo_pagamento.map(|m| m.label()).unwrap_or("--")}</span></div>
                                        <div class="details-card__row"><span>"Condição"</span><span>{p.condicao_pagamento.map(|c| c.label()).unwrap_or("--")}</span></div>
                                        <div class="details-card__row"><span>"Parcelas"</span><span>{p.parcelas.unwrap_or(1)}</span></div>
                                        <div class="details-card__row"><span>"Entrada"</span><span>{format_currency(Some(p.valor_entrada))}</span></div>
                                        <div class="details-card__row"><span>"Restante"</span><span>{format_currency(Some(p.valor_restante))}</span></div>
                                    }.into_any(),
                                    None => view! { <p>"Sem dados de pagamento."</p> }.into_any(),
                                }}
                                <div class="details-card__row details-card__row--total">
                                    <span>"Total"</span><strong>{format_currency(Some(total))}</strong>
                                </div>
                            </div>
                        </div>

                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Produto"</th>
                                        <th class="table__header-cell text-right">"Qtd."</th>
                                        <th class="table__header-cell text-right">"Preço unit."</th>
                                        <th class="table__header-cell text-right">"Subtotal"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {s.produtos.iter().map(|item| {
                                        let (unit, subtotal) = (item.valor_unitario, item.subtotal());
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{item.produto.nome.clone()}</td>
                                                <td class="table__cell text-right">{item.quantidade}</td>
                                                <TableCellMoney value=Signal::derive(move || Some(unit)) />
                                                <TableCellMoney value=Signal::derive(move || Some(subtotal)) />
                                            </tr>
                                        }
                                    }).collect_view()}
                                    <tr class="table__row table__row--total">
                                        <td class="table__cell" colspan="3">"Total dos itens"</td>
                                        <TableCellMoney value=Signal::derive(move || Some(items_total)) bold=true />
                                    </tr>
                                </tbody>
                            </table>
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
