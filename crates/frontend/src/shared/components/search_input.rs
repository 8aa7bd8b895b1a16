use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Задержка перед запросом после последнего нажатия клавиши, мс
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Поле поиска с debounce: `on_search` вызывается только для последнего
/// значения, после которого пользователь не печатал `delay_ms`.
#[component]
pub fn SearchInput(
    #[prop(into)]
    placeholder: String,
    on_search: Callback<String>,
    #[prop(optional, default = SEARCH_DEBOUNCE_MS)]
    delay_ms: u32,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let generation = StoredValue::new(0_u64);

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        text.set(value.clone());

        let ticket = generation.get_value().wrapping_add(1);
        generation.set_value(ticket);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.get_value() == ticket {
                on_search.run(value);
            }
        });
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="search"
                class="form__input search-input__field"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=on_input
            />
        </div>
    }
}
