use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Сообщение валидации под полем формы
#[component]
pub fn FieldError(
    #[prop(into)]
    errors: Signal<Option<FieldErrors>>,
    field: &'static str,
) -> impl IntoView {
    let message = move || {
        errors
            .get()
            .and_then(|e| e.get(field).map(str::to_string))
    };

    view! {
        {move || message().map(|m| view! { <p class="form__error">{m}</p> })}
    }
}

/// Блок с ошибкой запроса (сервер, сеть)
#[component]
pub fn ErrorBox(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}

/// Сообщение для одного поля из общего набора ошибок формы
pub fn field_message(
    errors: impl Into<Signal<Option<FieldErrors>>>,
    field: &'static str,
) -> Signal<Option<String>> {
    let errors = errors.into();
    Signal::derive(move || {
        errors
            .get()
            .and_then(|e| e.get(field).map(str::to_string))
    })
}
