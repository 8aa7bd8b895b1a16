use super::model;
use crate::shared::date_utils::today_iso;
use crate::system::auth::context::SessionContext;
use contracts::domain::a005_appointment::AppointmentDto;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct AppointmentDetailsViewModel {
    pub form: RwSignal<AppointmentDto>,
    pub errors: RwSignal<Option<FieldErrors>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    session: SessionContext,
}

impl AppointmentDetailsViewModel {
    pub fn new(session: SessionContext) -> Self {
        Self {
            form: RwSignal::new(AppointmentDto {
                date: today_iso(),
                ..Default::default()
            }),
            errors: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else { return };
        let vm = *self;
        let api = self.session.client();
        spawn_local(async move {
            match model::fetch_by_id(&api, &id).await {
                Ok(appointment) => vm.form.set(appointment.into()),
                Err(e) => vm.error.set(Some(
                    vm.session.error_message(&e, "Erro ao carregar agendamento."),
                )),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(errors) = dto.validate() {
            self.errors.set(Some(errors));
            return;
        }
        self.errors.set(None);

        let vm = *self;
        let api = self.session.client();
        self.saving.set(true);
        spawn_local(async move {
            let result = model::save_form(&api, &dto).await;
            vm.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => vm.error.set(Some(
                    vm.session.error_message(&e, "Erro ao salvar agendamento."),
                )),
            }
        });
    }
}
