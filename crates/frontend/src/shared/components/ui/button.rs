use leptos::prelude::*;

/// CSS-классы кнопки по варианту и размеру
pub fn button_class(variant: Option<&str>, size: Option<&str>, busy: bool) -> String {
    let variant = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };
    let mut class = format!("button {}", variant);
    if size == Some("sm") {
        class.push_str(" button--small");
    }
    if busy {
        class.push_str(" button--busy");
    }
    class
}

/// Кнопка консоли. Варианты: primary (по умолчанию), secondary, ghost, danger.
///
/// `busy` блокирует кнопку на время запроса (сохранение формы, вход).
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (по умолчанию) или "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Идёт запрос: кнопка недоступна и помечена `aria-busy`
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_busy = move || busy.get().unwrap_or(false);
    let class_name = move || {
        let base = button_class(variant.get().as_deref(), size.get().as_deref(), is_busy());
        match class.get() {
            Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
            _ => base,
        }
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=class_name
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            aria-busy=move || is_busy().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(None, None, false), "button button--primary");
        assert_eq!(
            button_class(Some("danger"), Some("sm"), false),
            "button button--danger button--small"
        );
        assert_eq!(
            button_class(Some("unknown"), None, true),
            "button button--primary button--busy"
        );
    }
}
