use super::view_model::AppointmentDetailsViewModel;
use crate::shared::components::field_error::{field_message, ErrorBox};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::domain::a005_appointment::AppointmentStatus;
use contracts::shared::masks::format_phone;
use leptos::prelude::*;

#[component]
pub fn AppointmentDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AppointmentDetailsViewModel::new(use_session());
    vm.load_if_needed(id);

    let statuses: Vec<(String, String)> = AppointmentStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect();

    view! {
        <div class="details-container appointment-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar agendamento" } else { "Novo agendamento" }}</h3>
            </div>

            <ErrorBox message=vm.error />

            <div class="details-form">
                <Input
                    label="Nome"
                    id="name"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
                    error=field_message(vm.errors, "name")
                />
                <Input
                    label="Telefone"
                    id="telephone"
                    placeholder="(00) 00000-0000"
                    maxlength=15
                    value=Signal::derive(move || vm.form.with(|f| f.telephone.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.telephone = format_phone(&v)))
                    error=field_message(vm.errors, "telephone")
                />
                <div class="form__row">
                    <Input
                        label="Data"
                        id="date"
                        input_type="date"
                        value=Signal::derive(move || vm.form.with(|f| f.date.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.date = v))
                        error=field_message(vm.errors, "date")
                    />
                    <Input
                        label="Hora"
                        id="hour"
                        input_type="time"
                        value=Signal::derive(move || vm.form.with(|f| f.hour.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.hour = v))
                        error=field_message(vm.errors, "hour")
                    />
                    <Select
                        label="Status"
                        id="status"
                        options=statuses
                        value=Signal::derive(move || vm.form.with(|f| f.status.label().to_string()))
                        on_change=Callback::new(move |v: String| {
                            if let Some(status) = AppointmentStatus::from_label(&v) {
                                vm.form.update(|f| f.status = status);
                            }
                        })
                    />
                </div>
                <Textarea
                    label="Observação"
                    id="observation"
                    value=Signal::derive(move || vm.form.with(|f| f.observation.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.observation = v))
                />
            </div>

            <div class="details-actions">
                <Button busy=vm.saving on_click=Callback::new(move |_| vm.save_command(on_saved))>
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
