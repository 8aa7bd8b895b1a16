use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::dialogs::confirm;
use crate::shared::http::{item_path, ApiClient};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use contracts::domain::a002_product::Product;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::ListQuery;
use contracts::shared::money::format_decimal;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_products(api: &ApiClient, query: &ListQuery) -> Result<Vec<Product>, ApiError> {
    api.get_with_query(&Product::api_path(), query).await
}

async fn delete_product(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&item_path(&Product::api_path(), id)).await
}

fn markup_label(product: &Product) -> String {
    product
        .markup_percent()
        .map(|m| format!("{}%", format_decimal(m, 1)))
        .unwrap_or_else(|| "--".to_string())
}

#[component]
pub fn ProductList() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());
    // None - форма закрыта, Some(None) - новый товар
    let editing = RwSignal::new(None::<Option<String>>);

    let fetch = move || {
        let api = session.client();
        let query = ListQuery::new().with_search(&search.get_untracked());
        spawn_local(async move {
            match fetch_products(&api, &query).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar produtos."),
                )),
            }
        });
    };

    let handle_delete = move |product: Product| {
        if !confirm(&format!("Excluir o produto {}?", product.nome)) {
            return;
        }
        let api = session.client();
        spawn_local(async move {
            match delete_product(&api, product.id.value()).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao excluir produto."),
                )),
            }
        });
    };

    fetch();

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Produtos">
                <Button on_click=Callback::new(move |_| editing.set(Some(None)))>
                    {icon("plus")}
                    "Novo produto"
                </Button>
            </PageHeader>

            <div class="page__content">
                <SearchInput
                    placeholder="Buscar por nome ou código"
                    on_search=Callback::new(move |term| {
                        search.set(term);
                        fetch();
                    })
                />

                <ErrorBox message=error />

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Código"</th>
                                <th class="table__header-cell">"Nome"</th>
                                <th class="table__header-cell">"Tipo"</th>
                                <th class="table__header-cell text-right">"Custo"</th>
                                <th class="table__header-cell text-right">"Venda"</th>
                                <th class="table__header-cell text-right">"Margem"</th>
                                <th class="table__header-cell text-right">"Estoque"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|p| p.id.clone()
                                children=move |product| {
                                    let id = product.id.value().to_string();
                                    let markup = markup_label(&product);
                                    let stock = if product.tipo.tracks_stock() {
                                        view! {
                                            <Badge variant=if product.is_out_of_stock() { "error" } else { "neutral" }>
                                                {product.estoque.to_string()}
                                            </Badge>
                                        }.into_any()
                                    } else {
                                        view! { <span>"--"</span> }.into_any()
                                    };
                                    let (cost, price) = (product.preco_custo, product.preco_venda);
                                    let for_delete = product.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{product.codigo.clone()}</td>
                                            <td class="table__cell">{product.nome.clone()}</td>
                                            <td class="table__cell">{product.tipo.label()}</td>
                                            <TableCellMoney value=Signal::derive(move || Some(cost)) />
                                            <TableCellMoney value=Signal::derive(move || Some(price)) bold=true />
                                            <td class="table__cell text-right">{markup}</td>
                                            <td class="table__cell text-right">{stock}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| editing.set(Some(Some(id.clone()))))>
                                                    {icon("edit")}
                                                </Button>
                                                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| handle_delete(for_delete.clone()))>
                                                    {icon("delete")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            {move || editing.get().map(|id| view! {
                <div class="modal-overlay">
                    <div class="modal-surface">
                        <ProductDetails
                            id=id
                            on_saved=Callback::new(move |_| {
                                editing.set(None);
                                fetch();
                            })
                            on_cancel=Callback::new(move |_| editing.set(None))
                        />
                    </div>
                </div>
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_label() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","codigo":"A","nome":"Armação","precoCusto":100,"precoVenda":250,"estoque":3,"tipo":"Óculos de Grau"}"#,
        )
        .unwrap();
        assert_eq!(markup_label(&product), "150,0%");
    }
}
