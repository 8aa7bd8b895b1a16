use super::view_model::CashTransactionViewModel;
use crate::shared::components::field_error::{field_message, ErrorBox};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::domain::a006_cash_register::TransactionKind;
use leptos::prelude::*;

fn kind_from_label(label: &str) -> Option<TransactionKind> {
    [TransactionKind::Entrada, TransactionKind::Saida]
        .into_iter()
        .find(|k| k.label() == label)
}

#[component]
pub fn CashTransactionForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = CashTransactionViewModel::new(use_session());

    let kinds: Vec<(String, String)> = [TransactionKind::Entrada, TransactionKind::Saida]
        .iter()
        .map(|k| (k.label().to_string(), k.label().to_string()))
        .collect();

    view! {
        <div class="details-container cash-transaction-form">
            <div class="details-header">
                <h3>"Nova transação"</h3>
            </div>

            <ErrorBox message=vm.error />

            <div class="details-form">
                <div class="form__row">
                    <Select
                        label="Tipo"
                        placeholder="Selecione..."
                        options=kinds
                        value=Signal::derive(move || vm.form.with(|f| {
                            f.tipo.map(|k| k.label().to_string()).unwrap_or_default()
                        }))
                        on_change=Callback::new(move |v: String| vm.form.update(|f| f.tipo = kind_from_label(&v)))
                        error=field_message(vm.errors, "tipo")
                    />
                    <Input
                        label="Valor (R$)"
                        placeholder="0,00"
                        value=Signal::derive(move || vm.form.with(|f| f.valor.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.valor = v))
                        error=field_message(vm.errors, "valor")
                    />
                </div>
                <Input
                    label="Descrição"
                    value=Signal::derive(move || vm.form.with(|f| f.descricao.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.descricao = v))
                    error=field_message(vm.errors, "descricao")
                />
            </div>

            <div class="details-actions">
                <Button busy=vm.saving on_click=Callback::new(move |_| vm.save_command(on_saved))>
                    {icon("save")}
                    {move || if vm.saving.get() { "Salvando..." } else { "Registrar" }}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("cancel")}
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(kind_from_label("Saída"), Some(TransactionKind::Saida));
        assert_eq!(kind_from_label(""), None);
    }
}
