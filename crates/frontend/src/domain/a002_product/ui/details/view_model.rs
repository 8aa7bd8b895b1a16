use super::model::{self, ProductForm};
use crate::system::auth::context::SessionContext;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub errors: RwSignal<Option<FieldErrors>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    session: SessionContext,
}

impl ProductDetailsViewModel {
    pub fn new(session: SessionContext) -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
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
                Ok(product) => vm.form.set(product.into()),
                Err(e) => vm.error.set(Some(
                    vm.session.error_message(&e, "Erro ao carregar produto."),
                )),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.with_untracked(ProductForm::to_dto);
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
                    vm.session.error_message(&e, "Erro ao salvar produto."),
                )),
            }
        });
    }
}
