use leptos::prelude::*;

/// Поле ввода с подписью и сообщением валидации
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "password", "email", "date", "time", "number"...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional)]
    maxlength: Option<u32>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Сообщение под полем (см. `field_message`)
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>{l}</label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                step=move || step.get()
                maxlength=maxlength
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|m| view! { <p class="form__error">{m}</p> })}
        </div>
    }
}
