use super::view_model::InstallmentPlanViewModel;
use crate::domain::a001_client::ui::picker::ClientPicker;
use crate::layout::global_context::use_app_context;
use crate::shared::components::field_error::{field_message, ErrorBox, FieldError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::date_utils::format_naive;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_session;
use contracts::shared::money::format_currency;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;

#[component]
fn Preview(vm: InstallmentPlanViewModel) -> impl IntoView {
    view! {
        <aside class="installment-preview">
            <h3 class="installment-preview__title">"Pré-visualização das parcelas"</h3>
            {move || {
                let items = vm.preview.get();
                if items.is_empty() {
                    return view! {
                        <p class="installment-preview__empty">"Preencha os dados para ver as parcelas."</p>
                    }.into_any();
                }
                view! {
                    <ul class="installment-preview__list">
                        {items.into_iter().map(|i| view! {
                            <li class="installment-preview__item">
                                <span>{format!("Parcela {}", i.number)}</span>
                                <span>{format_naive(i.due_date)}</span>
                                <strong>{format_currency(Some(i.amount))}</strong>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </aside>
    }
}

#[component]
pub fn InstallmentPlanForm() -> impl IntoView {
    let ctx = use_app_context();
    let vm = InstallmentPlanViewModel::new(use_session());

    view! {
        <PageFrame page_id="a004_invoice--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Novo Parcelamento">
                <Button variant="secondary" on_click=Callback::new(move |_| ctx.navigate(AppRoute::Invoices))>
                    {icon("arrow-left")}
                    "Voltar"
                </Button>
            </PageHeader>

            <div class="page__content installment-plan">
                <div class="installment-plan__form">
                    <ErrorBox message=vm.error />

                    <div class="form__group">
                        <label class="form__label">"Cliente"</label>
                        <ClientPicker
                            selected=Signal::derive(move || vm.draft.with(|d| d.cliente.clone()))
                            on_select=Callback::new(move |client| vm.select_client(client))
                        />
                        <FieldError errors=vm.errors field="clienteId" />
                    </div>

                    <div class="form__row">
                        <Input
                            label="Valor total (R$)"
                            placeholder="0,00"
                            value=Signal::derive(move || vm.draft.with(|d| d.valor_total.clone()))
                            on_input=Callback::new(move |v| vm.draft.update(|d| d.valor_total = v))
                            error=field_message(vm.errors, "valorTotal")
                        />
                        <Input
                            label="Entrada (R$)"
                            placeholder="0,00"
                            value=Signal::derive(move || vm.draft.with(|d| d.valor_entrada.clone()))
                            on_input=Callback::new(move |v| vm.draft.update(|d| d.valor_entrada = v))
                            error=field_message(vm.errors, "valorEntrada")
                        />
                    </div>
                    <div class="form__row">
                        <Input
                            label="Número de parcelas"
                            input_type="number"
                            step="1"
                            value=Signal::derive(move || vm.draft.with(|d| d.num_parcelas.clone()))
                            on_input=Callback::new(move |v| vm.draft.update(|d| d.num_parcelas = v))
                            error=field_message(vm.errors, "numParcelas")
                        />
                        <Input
                            label="Primeiro vencimento"
                            input_type="date"
                            value=Signal::derive(move || vm.draft.with(|d| d.data_primeiro_vencimento.clone()))
                            on_input=Callback::new(move |v| vm.draft.update(|d| d.data_primeiro_vencimento = v))
                            error=field_message(vm.errors, "dataPrimeiroVencimento")
                        />
                    </div>
                    <Input
                        label="Valor por parcela"
                        disabled=true
                        value=Signal::derive(move || format_currency(Some(vm.amount_per_installment())))
                    />

                    <div class="details-actions">
                        <Button
                            busy=vm.saving
                            on_click=Callback::new(move |_| vm.submit_command(ctx))
                        >
                            {icon("save")}
                            {move || if vm.saving.get() { "Gerando..." } else { "Gerar parcelamento" }}
                        </Button>
                    </div>
                </div>

                <Preview vm=vm />
            </div>
        </PageFrame>
    }
}
