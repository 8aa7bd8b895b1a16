use super::view_model::ClientDetailsViewModel;
use crate::shared::components::field_error::{field_message, ErrorBox};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::domain::a001_client::Prescription;
use contracts::shared::masks::{format_cep, format_cpf, format_phone};
use leptos::prelude::*;

const GENDERS: [&str; 3] = ["Masculino", "Feminino", "Outro"];

fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Поле рецепта: строковое значение, пустое -> None
fn prescription_input(
    vm: ClientDetailsViewModel,
    label: &'static str,
    get: fn(&Prescription) -> &Option<String>,
    set: fn(&mut Prescription, Option<String>),
) -> impl IntoView {
    view! {
        <Input
            label=label
            value=Signal::derive(move || vm.form.with(|f| get(&f.prescription).clone().unwrap_or_default()))
            on_input=Callback::new(move |v: String| vm.form.update(|f| set(&mut f.prescription, optional_text(v))))
        />
    }
}

#[component]
pub fn ClientDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ClientDetailsViewModel::new(use_session());
    vm.load_if_needed(id);

    let genders: Vec<(String, String)> = GENDERS
        .iter()
        .map(|g| (g.to_string(), g.to_string()))
        .collect();

    view! {
        <div class="details-container client-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar cliente" } else { "Novo cliente" }}</h3>
            </div>

            <ErrorBox message=vm.error />

            <div class="details-form">
                <div class="form__row">
                    <Input
                        label="Nome completo"
                        id="fullName"
                        value=Signal::derive(move || vm.form.with(|f| f.full_name.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.full_name = v))
                        error=field_message(vm.errors, "fullName")
                    />
                    <Input
                        label="CPF"
                        id="cpf"
                        placeholder="000.000.000-00"
                        maxlength=14
                        value=Signal::derive(move || vm.form.with(|f| f.cpf.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.cpf = format_cpf(&v)))
                        error=field_message(vm.errors, "cpf")
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="Telefone"
                        id="phone"
                        placeholder="(00) 00000-0000"
                        maxlength=15
                        value=Signal::derive(move || vm.form.with(|f| f.phone.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.phone = format_phone(&v)))
                        error=field_message(vm.errors, "phone")
                    />
                    <Input
                        label="Data de nascimento"
                        id="birthDate"
                        input_type="date"
                        value=Signal::derive(move || vm.form.with(|f| f.birth_date.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.birth_date = v))
                    />
                    <Select
                        label="Gênero"
                        id="gender"
                        placeholder="Selecione..."
                        options=genders
                        value=Signal::derive(move || vm.form.with(|f| f.gender.clone()))
                        on_change=Callback::new(move |v| vm.form.update(|f| f.gender = v))
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="Endereço"
                        id="address"
                        value=Signal::derive(move || vm.form.with(|f| f.address.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.address = v))
                    />
                    <Input
                        label="CEP"
                        id="cep"
                        placeholder="00000-000"
                        maxlength=9
                        value=Signal::derive(move || vm.form.with(|f| f.cep.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.cep = format_cep(&v)))
                    />
                </div>

                <fieldset class="form__fieldset">
                    <legend>"Receita"</legend>
                    <div class="form__row">
                        {prescription_input(vm, "Esférico OD", |p| &p.esferico_direito, |p, v| p.esferico_direito = v)}
                        {prescription_input(vm, "Cilíndrico OD", |p| &p.cilindrico_direito, |p, v| p.cilindrico_direito = v)}
                        {prescription_input(vm, "Eixo OD", |p| &p.eixo_direito, |p, v| p.eixo_direito = v)}
                    </div>
                    <div class="form__row">
                        {prescription_input(vm, "Esférico OE", |p| &p.esferico_esquerdo, |p, v| p.esferico_esquerdo = v)}
                        {prescription_input(vm, "Cilíndrico OE", |p| &p.cilindrico_esquerdo, |p, v| p.cilindrico_esquerdo = v)}
                        {prescription_input(vm, "Eixo OE", |p| &p.eixo_esquerdo, |p, v| p.eixo_esquerdo = v)}
                    </div>
                    <div class="form__row">
                        {prescription_input(vm, "Adição", |p| &p.adicao, |p, v| p.adicao = v)}
                        <Input
                            label="Vencimento da receita"
                            input_type="date"
                            value=Signal::derive(move || vm.form.with(|f| {
                                f.prescription.vencimento_receita.clone().unwrap_or_default()
                            }))
                            on_input=Callback::new(move |v: String| vm.form.update(|f| {
                                f.prescription.vencimento_receita = optional_text(v)
                            }))
                        />
                    </div>
                </fieldset>

                <Textarea
                    label="Observações"
                    id="notes"
                    value=Signal::derive(move || vm.form.with(|f| f.notes.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.notes = v))
                />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prescription_value_is_none() {
        assert_eq!(optional_text("  ".into()), None);
        assert_eq!(optional_text("-1,25".into()), Some("-1,25".to_string()));
    }
}
