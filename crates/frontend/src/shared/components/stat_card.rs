use crate::shared::icons::icon;
use leptos::prelude::*;

/// Визуальный статус карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl CardTone {
    fn class(&self) -> &'static str {
        match self {
            CardTone::Good => "stat-card stat-card--success",
            CardTone::Bad => "stat-card stat-card--error",
            CardTone::Warning => "stat-card stat-card--warning",
            CardTone::Neutral => "stat-card",
        }
    }

    /// Ненулевой счётчик проблем окрашивает карточку
    pub fn alert_if(count: u32, tone: CardTone) -> CardTone {
        if count > 0 {
            tone
        } else {
            CardTone::Neutral
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into, optional)]
    tone: Signal<CardTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "...".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=move || tone.get().class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_tone() {
        assert_eq!(CardTone::alert_if(0, CardTone::Bad), CardTone::Neutral);
        assert_eq!(CardTone::alert_if(3, CardTone::Bad), CardTone::Bad);
        assert_eq!(CardTone::Warning.class(), "stat-card stat-card--warning");
    }
}
