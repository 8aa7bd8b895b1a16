use super::view_model::SaleFormViewModel;
use crate::domain::a001_client::ui::picker::ClientPicker;
use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::{field_message, ErrorBox, FieldError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use contracts::domain::a003_sale::{PaymentMethod, SaleDraft};
use contracts::shared::installments::installment_amount;
use contracts::shared::money::{format_currency, parse_currency};
use contracts::system::routing::AppRoute;
use leptos::prelude::*;

/// Максимум парцел для карты и boleto
const MAX_INSTALLMENTS: u32 = 12;

/// Число из поля ввода; мусор даёт NaN, его ловит валидация
fn parse_number(text: &str) -> f64 {
    parse_currency(text).unwrap_or(f64::NAN)
}

fn per_installment(draft: &SaleDraft) -> Option<f64> {
    let method = draft.metodo?;
    if !method.allows_installments() || draft.parcelas <= 1 {
        return None;
    }
    Some(installment_amount(
        draft.remaining(),
        0.0,
        i64::from(draft.parcelas),
    ))
}

#[component]
fn ClientSection(vm: SaleFormViewModel) -> impl IntoView {
    view! {
        <section class="form__section">
            <h3 class="form__section-title">{icon("user")} "Cliente"</h3>
            <ClientPicker
                selected=Signal::derive(move || vm.draft.with(|d| d.cliente.clone()))
                on_select=Callback::new(move |client| vm.select_client(client))
            />
            <FieldError errors=vm.errors field="cliente" />
        </section>
    }
}

#[component]
fn ItemsTable(vm: SaleFormViewModel) -> impl IntoView {
    // Строки по индексу: перестраиваются только при добавлении/удалении
    let rows = move || {
        vm.draft.with(|d| {
            d.itens
                .iter()
                .enumerate()
                .map(|(i, item)| (i, item.produto.id.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="form__section">
            <h3 class="form__section-title">{icon("products")} "Produtos"</h3>
            <SearchInput
                placeholder="Buscar produto por nome ou código"
                on_search=Callback::new(move |term| vm.search_products(term))
            />
            <ul class="picker__results">
                {move || vm.product_results.get().into_iter().map(|product| {
                    let label = format!("{} ({})", product.nome, format_currency(Some(product.preco_venda)));
                    view! {
                        <li class="picker__item" on:click=move |_| vm.add_product(&product)>
                            {icon("plus")} {label}
                        </li>
                    }
                }).collect_view()}
            </ul>

            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Produto"</th>
                        <th class="table__header-cell">"Qtd."</th>
                        <th class="table__header-cell">"Preço unit."</th>
                        <th class="table__header-cell text-right">"Subtotal"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |(index, _)| {
                            let name = vm.draft.with_untracked(|d| {
                                d.itens.get(index).map(|i| i.produto.nome.clone()).unwrap_or_default()
                            });
                            let price = vm.draft.with_untracked(|d| {
                                d.itens.get(index).map(|i| format!("{:.2}", i.preco_unitario)).unwrap_or_default()
                            });
                            let subtotal = move || vm.draft.with(|d| {
                                format_currency(d.itens.get(index).map(|i| i.subtotal()))
                            });
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{name}</td>
                                    <td class="table__cell">
                                        <input
                                            class="form__input form__input--narrow"
                                            type="number"
                                            min="1"
                                            step="1"
                                            prop:value=move || vm.draft.with(|d| {
                                                d.itens.get(index).map(|i| i.quantidade.to_string()).unwrap_or_default()
                                            })
                                            on:input=move |ev| {
                                                let q = parse_number(&event_target_value(&ev));
                                                vm.draft.update(|d| {
                                                    if let Some(item) = d.itens.get_mut(index) {
                                                        item.quantidade = q;
                                                    }
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell">
                                        <input
                                            class="form__input form__input--narrow"
                                            type="number"
                                            min="0"
                                            step="0.01"
                                            value=price
                                            on:input=move |ev| {
                                                let p = parse_number(&event_target_value(&ev));
                                                vm.draft.update(|d| {
                                                    if let Some(item) = d.itens.get_mut(index) {
                                                        item.preco_unitario = p;
                                                    }
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell text-right">{subtotal}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.draft.update(|d| d.remove_item(index)))>
                                            {icon("delete")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <FieldError errors=vm.errors field="itens" />
            <FieldError errors=vm.errors field="quantidade" />
            <FieldError errors=vm.errors field="precoUnitario" />
        </section>
    }
}

#[component]
fn PaymentSection(vm: SaleFormViewModel) -> impl IntoView {
    let methods: Vec<(String, String)> = PaymentMethod::ALL
        .iter()
        .map(|m| (m.label().to_string(), m.label().to_string()))
        .collect();
    let installment_options: Vec<(String, String)> = (1..=MAX_INSTALLMENTS)
        .map(|n| (n.to_string(), format!("{}x", n)))
        .collect();
    let allows_installments =
        move || vm.draft.with(|d| d.metodo.is_some_and(|m| m.allows_installments()));
    let entry_initial = vm.draft.with_untracked(|d| format!("{:.2}", d.valor_entrada));

    view! {
        <section class="form__section">
            <h3 class="form__section-title">{icon("cash")} "Pagamento"</h3>
            <div class="form__row">
                <Select
                    label="Método de pagamento"
                    placeholder="Selecione..."
                    options=methods
                    value=Signal::derive(move || vm.draft.with(|d| {
                        d.metodo.map(|m| m.label().to_string()).unwrap_or_default()
                    }))
                    on_change=Callback::new(move |v: String| vm.draft.update(|d| {
                        d.metodo = PaymentMethod::from_label(&v);
                    }))
                    error=field_message(vm.errors, "metodo")
                />
                <Show when=allows_installments>
                    <Select
                        label="Parcelas"
                        options=installment_options.clone()
                        value=Signal::derive(move || vm.draft.with(|d| d.parcelas.to_string()))
                        on_change=Callback::new(move |v: String| vm.draft.update(|d| {
                            d.parcelas = v.parse().unwrap_or(1);
                        }))
                    />
                </Show>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label" for="valorEntrada">"Entrada (R$)"</label>
                    <input
                        id="valorEntrada"
                        class="form__input"
                        type="number"
                        min="0"
                        step="0.01"
                        value=entry_initial
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            let value = if text.trim().is_empty() { 0.0 } else { parse_number(&text) };
                            vm.draft.update(|d| d.valor_entrada = value);
                        }
                    />
                    <FieldError errors=vm.errors field="valorEntrada" />
                </div>
                <Input
                    label="Data da venda"
                    input_type="date"
                    value=Signal::derive(move || vm.draft.with(|d| d.data_venda.clone()))
                    on_input=Callback::new(move |v| vm.draft.update(|d| d.data_venda = v))
                    error=field_message(vm.errors, "dataVenda")
                />
            </div>
        </section>
    }
}

#[component]
fn Summary(vm: SaleFormViewModel) -> impl IntoView {
    view! {
        <div class="sale-summary">
            <div class="sale-summary__row">
                <span>"Total"</span>
                <strong>{move || vm.draft.with(|d| format_currency(Some(d.total())))}</strong>
            </div>
            <div class="sale-summary__row">
                <span>"Restante"</span>
                <span>{move || vm.draft.with(|d| format_currency(Some(d.remaining())))}</span>
            </div>
            {move || vm.draft.with(per_installment).map(|amount| view! {
                <div class="sale-summary__row">
                    <span>{move || format!("{}x de", vm.draft.with(|d| d.parcelas))}</span>
                    <span>{format_currency(Some(amount))}</span>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn SaleForm(id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let vm = SaleFormViewModel::new(id, use_session());
    vm.load_if_needed();

    let title = if vm.is_edit_mode() { "Editar venda" } else { "Nova venda" };
    let back = move || match vm.id.get_value() {
        Some(id) => AppRoute::SaleDetails(id),
        None => AppRoute::Sales,
    };

    view! {
        <PageFrame page_id="a003_sale--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(back()))>
                    {icon("arrow-left")}
                    "Voltar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox message=vm.error />

                <Show when=move || vm.ready.get() fallback=|| view! { <p class="page__loading">"Carregando..."</p> }>
                    <div class="sale-form">
                        <ClientSection vm=vm />
                        <ItemsTable vm=vm />
                        <PaymentSection vm=vm />
                        <Summary vm=vm />

                        <div class="details-actions">
                            <Button
                                busy=vm.saving
                                on_click=Callback::new(move |_| vm.save_command(ctx))
                            >
                                {icon("save")}
                                {move || if vm.saving.get() { "Salvando..." } else { "Finalizar venda" }}
                            </Button>
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::{ProductId, ProductRef};

    fn draft_with_item(price: f64, qty: f64) -> SaleDraft {
        let mut d = SaleDraft::new("2025-03-10");
        d.add_product(ProductRef {
            id: Some(ProductId::new("p1")),
            nome: "Armação".into(),
            codigo: None,
            preco_venda: Some(price),
        });
        d.itens[0].quantidade = qty;
        d
    }

    #[test]
    fn test_per_installment_only_for_card_or_boleto() {
        let mut d = draft_with_item(300.0, 1.0);
        d.valor_entrada = 60.0;
        d.parcelas = 3;
        d.metodo = Some(PaymentMethod::Pix);
        assert_eq!(per_installment(&d), None);

        d.metodo = Some(PaymentMethod::CreditCard);
        assert_eq!(per_installment(&d), Some(80.0));
    }

    #[test]
    fn test_garbage_number_is_nan() {
        assert!(parse_number("abc").is_nan());
        assert_eq!(parse_number("12.5"), 12.5);
    }
}
