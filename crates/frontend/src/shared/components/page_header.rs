use leptos::prelude::*;

/// Заголовок страницы: название, подзаголовок и кнопки действий (children).
///
/// Стоит первым внутри `PageFrame` на каждой странице консоли; в списках
/// справа кнопки "Novo ...", на дашборде приветствие и "Atualizar".
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Кнопки действий (пустой фрагмент, если не нужны)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
