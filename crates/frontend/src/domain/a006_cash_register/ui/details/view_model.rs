use super::model::{self, TransactionForm};
use crate::system::auth::context::SessionContext;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CashTransactionViewModel {
    pub form: RwSignal<TransactionForm>,
    pub errors: RwSignal<Option<FieldErrors>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    session: SessionContext,
}

impl CashTransactionViewModel {
    pub fn new(session: SessionContext) -> Self {
        Self {
            form: RwSignal::new(TransactionForm::default()),
            errors: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session,
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.with_untracked(TransactionForm::to_dto);
        if let Err(errors) = dto.validate() {
            self.errors.set(Some(errors));
            return;
        }
        self.errors.set(None);

        let vm = *self;
        let api = self.session.client();
        self.saving.set(true);
        spawn_local(async move {
            let result = model::create_transaction(&api, &dto).await;
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    vm.form.set(TransactionForm::default());
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(
                    vm.session.error_message(&e, "Erro ao registrar transação."),
                )),
            }
        });
    }
}
