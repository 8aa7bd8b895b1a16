use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::SessionContext;
use contracts::domain::a001_client::ClientRef;
use contracts::domain::a004_invoice::InstallmentPlanDraft;
use contracts::shared::installments::Installment;
use contracts::shared::validation::FieldErrors;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct InstallmentPlanViewModel {
    pub draft: RwSignal<InstallmentPlanDraft>,
    /// График пересчитывается при каждом изменении полей
    pub preview: Memo<Vec<Installment>>,
    pub errors: RwSignal<Option<FieldErrors>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    session: SessionContext,
}

impl InstallmentPlanViewModel {
    pub fn new(session: SessionContext) -> Self {
        let draft = RwSignal::new(InstallmentPlanDraft::default());
        Self {
            draft,
            preview: Memo::new(move |_| draft.with(InstallmentPlanDraft::preview)),
            errors: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session,
        }
    }

    pub fn select_client(&self, client: Option<ClientRef>) {
        self.draft.update(|d| d.cliente = client);
    }

    pub fn amount_per_installment(&self) -> f64 {
        self.draft.with(InstallmentPlanDraft::amount_per_installment)
    }

    pub fn submit_command(&self, ctx: AppGlobalContext) {
        let request = match self.draft.with_untracked(InstallmentPlanDraft::to_request) {
            Ok(request) => request,
            Err(errors) => {
                self.errors.set(Some(errors));
                return;
            }
        };
        self.errors.set(None);

        let vm = *self;
        let api = self.session.client();
        self.saving.set(true);
        spawn_local(async move {
            let result = model::create_plan(&api, &request).await;
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!(
                        "installment plan created: {} x {}",
                        request.num_parcelas,
                        request.valor_total
                    );
                    ctx.navigate(AppRoute::Invoices);
                }
                Err(e) => vm.error.set(Some(
                    vm.session.error_message(&e, "Erro ao gerar parcelamento."),
                )),
            }
        });
    }
}
