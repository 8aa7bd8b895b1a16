use contracts::shared::api_error::ApiError;
use contracts::system::auth::LoginResponse;
use contracts::system::session::{Session, SessionStore};
use leptos::prelude::*;

use super::storage::LocalStorageSessionStore;
use crate::shared::http::ApiClient;

/// Сессия, доступная страницам через контекст
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
}

impl SessionContext {
    /// Восстанавливает сессию из хранилища при старте
    pub fn restore(store: &impl SessionStore) -> Self {
        let session = store.load().unwrap_or_else(Session::anonymous);
        if session.is_authenticated() {
            log::info!("session restored for {}", session.user_name().unwrap_or("?"));
        }
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn user_name(&self) -> Option<String> {
        self.session.with(|s| s.user_name().map(str::to_string))
    }

    pub fn sign_in(&self, response: LoginResponse) {
        let session = Session::from_login(response);
        LocalStorageSessionStore.save(&session);
        self.session.set(session);
    }

    pub fn sign_out(&self) {
        LocalStorageSessionStore.clear();
        self.session.update(Session::sign_out);
    }

    /// HTTP-клиент с текущим токеном
    pub fn client(&self) -> ApiClient {
        self.session
            .with_untracked(|s| ApiClient::with_token(s.bearer_token()))
    }

    /// Текст ошибки для пользователя. 401/403 завершает сессию.
    pub fn error_message(&self, err: &ApiError, fallback: &str) -> String {
        if err.is_unauthorized() {
            log::warn!("token rejected, signing out");
            self.sign_out();
        }
        err.user_message(fallback)
    }
}

/// Session provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::restore(&LocalStorageSessionStore));
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
