use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state for the whole app
    provide_context(AppGlobalContext::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
