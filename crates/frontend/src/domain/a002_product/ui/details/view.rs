use super::view_model::ProductDetailsViewModel;
use crate::shared::components::field_error::{field_message, ErrorBox};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::domain::a002_product::ProductKind;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(use_session());
    vm.load_if_needed(id);

    let kinds: Vec<(String, String)> = ProductKind::ALL
        .iter()
        .map(|k| (k.label().to_string(), k.label().to_string()))
        .collect();

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar produto" } else { "Novo produto" }}</h3>
            </div>

            <ErrorBox message=vm.error />

            <div class="details-form">
                <div class="form__row">
                    <Input
                        label="Código"
                        id="codigo"
                        value=Signal::derive(move || vm.form.with(|f| f.codigo.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.codigo = v))
                        error=field_message(vm.errors, "codigo")
                    />
                    <Input
                        label="Nome"
                        id="nome"
                        value=Signal::derive(move || vm.form.with(|f| f.nome.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.nome = v))
                        error=field_message(vm.errors, "nome")
                    />
                </div>
                <Select
                    label="Tipo"
                    id="tipo"
                    options=kinds
                    value=Signal::derive(move || vm.form.with(|f| f.tipo.label().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(kind) = ProductKind::from_label(&v) {
                            vm.form.update(|f| f.tipo = kind);
                        }
                    })
                />
                <div class="form__row">
                    <Input
                        label="Preço de custo (R$)"
                        id="precoCusto"
                        placeholder="0,00"
                        value=Signal::derive(move || vm.form.with(|f| f.preco_custo.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.preco_custo = v))
                        error=field_message(vm.errors, "precoCusto")
                    />
                    <Input
                        label="Preço de venda (R$)"
                        id="precoVenda"
                        placeholder="0,00"
                        value=Signal::derive(move || vm.form.with(|f| f.preco_venda.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.preco_venda = v))
                        error=field_message(vm.errors, "precoVenda")
                    />
                    <Input
                        label="Estoque"
                        id="estoque"
                        input_type="number"
                        step="1"
                        value=Signal::derive(move || vm.form.with(|f| f.estoque.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.estoque = v))
                        error=field_message(vm.errors, "estoque")
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    busy=vm.saving
                    on_click=Callback::new(move |_| vm.save_command(on_saved))
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Salvando..." } else { "Salvar" }}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("cancel")}
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
