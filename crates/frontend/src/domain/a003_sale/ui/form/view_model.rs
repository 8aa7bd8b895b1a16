use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::today_iso;
use crate::system::auth::context::SessionContext;
use contracts::domain::a001_client::ClientRef;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_sale::SaleDraft;
use contracts::shared::validation::FieldErrors;
use contracts::system::routing::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SaleFormViewModel {
    pub id: StoredValue<Option<String>>,
    pub draft: RwSignal<SaleDraft>,
    /// Форма строится после загрузки продажи (для нового - сразу)
    pub ready: RwSignal<bool>,
    pub product_results: RwSignal<Vec<Product>>,
    pub errors: RwSignal<Option<FieldErrors>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    session: SessionContext,
}

impl SaleFormViewModel {
    pub fn new(id: Option<String>, session: SessionContext) -> Self {
        let ready = id.is_none();
        Self {
            id: StoredValue::new(id),
            draft: RwSignal::new(SaleDraft::new(&today_iso())),
            ready: RwSignal::new(ready),
            product_results: RwSignal::new(Vec::new()),
            errors: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    fn report(&self, err: &contracts::shared::api_error::ApiError, fallback: &str) {
        self.error.set(Some(self.session.error_message(err, fallback)));
    }

    /// При редактировании загружает продажу в черновик
    pub fn load_if_needed(&self) {
        let Some(id) = self.id.get_value() else { return };
        let vm = *self;
        let api = self.session.client();
        spawn_local(async move {
            match model::fetch_sale(&api, &id).await {
                Ok(sale) => {
                    vm.draft.set(sale.into());
                    vm.ready.set(true);
                }
                Err(e) => vm.report(&e, "Erro ao carregar venda."),
            }
        });
    }

    pub fn search_products(&self, term: String) {
        if term.trim().is_empty() {
            self.product_results.set(Vec::new());
            return;
        }
        let vm = *self;
        let api = self.session.client();
        spawn_local(async move {
            match model::search_products(&api, &term).await {
                Ok(mut products) => {
                    products.truncate(model::PICKER_LIMIT);
                    vm.product_results.set(products);
                }
                Err(e) => vm.report(&e, "Erro ao buscar produtos."),
            }
        });
    }

    pub fn select_client(&self, client: Option<ClientRef>) {
        self.draft.update(|d| d.cliente = client);
    }

    pub fn add_product(&self, product: &Product) {
        self.draft.update(|d| d.add_product(product.to_ref()));
        self.product_results.set(Vec::new());
    }

    pub fn save_command(&self, ctx: AppGlobalContext) {
        let payload = match self.draft.with_untracked(SaleDraft::to_payload) {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(Some(errors));
                return;
            }
        };
        self.errors.set(None);

        let vm = *self;
        let api = self.session.client();
        let id = self.id.get_value();
        self.saving.set(true);
        spawn_local(async move {
            let result = model::save_sale(&api, id.as_deref(), &payload).await;
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("sale saved, total {}", payload.valor_total);
                    ctx.navigate(match id {
                        Some(id) => AppRoute::SaleDetails(id),
                        None => AppRoute::Sales,
                    });
                }
                Err(e) => vm.report(&e, "Erro ao salvar venda."),
            }
        });
    }
}
