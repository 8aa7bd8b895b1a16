//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the signed-in user and logout.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    // guard переведёт на /login
    let logout = move |_| {
        log::info!("logout");
        session.sign_out();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Ótica | Painel"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || session.user_name().unwrap_or_else(|| "Usuário".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
