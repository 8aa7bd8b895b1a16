use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::Button;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::{api, context::use_session};

const NETWORK_ERROR: &str = "Erro de rede ou falha ao conectar.";

/// Сообщение сервера, если оно пришло; иначе общий текст по виду ошибки
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized { message: None } => "E-mail ou senha inválidos.".to_string(),
        other => other.user_message(NETWORK_ERROR),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let senha_val = senha.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, senha_val).await {
                Ok(response) => {
                    log::info!("signed in as {}", response.user.nome);
                    // guard сам переведёт на дашборд
                    session.sign_in(response);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_message.set(Some(login_error_message(&e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Login do Sistema"</h1>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="senha">"Senha"</label>
                            <input
                                type="password"
                                id="senha"
                                prop:value=move || senha.get()
                                on:input=move |ev| set_senha.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <Button button_type="submit" class="login-box__submit" busy=is_loading>
                            {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                        </Button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message(&ApiError::Unauthorized { message: None }),
            "E-mail ou senha inválidos."
        );
        assert_eq!(
            login_error_message(&ApiError::from_response(
                401,
                r#"{"error":"Credenciais inválidas"}"#
            )),
            "Credenciais inválidas"
        );
        assert_eq!(
            login_error_message(&ApiError::Http {
                status: 400,
                message: Some("Usuário não encontrado".into())
            }),
            "Usuário não encontrado"
        );
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            NETWORK_ERROR
        );
    }
}
