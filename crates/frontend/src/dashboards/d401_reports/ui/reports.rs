use crate::dashboards::d401_reports::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;
use contracts::dashboards::d401_reports::{BarRow, ReportKind};
use contracts::shared::money::{format_brl, format_integer};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Подпись значения: деньги в R$, счётчики целым числом
pub fn value_text(kind: ReportKind, value: f64) -> String {
    if kind.is_monetary() {
        format_brl(value)
    } else {
        format_integer(value.round() as i64)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ReportState {
    Loading,
    Ready(Vec<BarRow>),
    Failed(String),
}

/// Одна серия: каждая грузится независимо, ошибка не мешает остальным
#[component]
fn ReportCard(kind: ReportKind, reload: ReadSignal<u32>) -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(ReportState::Loading);

    Effect::new(move |_| {
        reload.track();
        state.set(ReportState::Loading);
        let client = session.client();
        spawn_local(async move {
            match api::get_report(&client, kind).await {
                Ok(rows) => state.set(ReportState::Ready(rows)),
                Err(e) => {
                    log::warn!("report {} failed: {}", kind.api_path(), e);
                    state.set(ReportState::Failed(
                        session.error_message(&e, "Erro ao carregar relatório."),
                    ));
                }
            }
        });
    });

    view! {
        <section class="card report">
            <h3 class="card__title">{kind.title()}</h3>
            {move || match state.get() {
                ReportState::Loading => view! { <p class="card__empty">"Carregando..."</p> }.into_any(),
                ReportState::Failed(msg) => view! { <p class="form__error">{msg}</p> }.into_any(),
                ReportState::Ready(rows) if rows.is_empty() => {
                    view! { <p class="card__empty">"Sem dados no período."</p> }.into_any()
                }
                ReportState::Ready(rows) => view! {
                    <ul class="bar-list">
                        {rows.into_iter().map(|row| view! {
                            <li class="bar-list__row">
                                <span class="bar-list__label">{row.label}</span>
                                <div class="bar-list__track">
                                    <div class="bar-list__bar" style=format!("width: {:.1}%", row.width)></div>
                                </div>
                                <span class="bar-list__value">{value_text(kind, row.value)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let (reload, set_reload) = signal(0_u32);

    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Relatórios">
                <Button variant="secondary" on_click=Callback::new(move |_| set_reload.update(|n| *n += 1))>
                    {icon("refresh")}
                    "Atualizar"
                </Button>
            </PageHeader>

            <div class="page__content report-grid">
                {ReportKind::ALL
                    .into_iter()
                    .map(|kind| view! { <ReportCard kind=kind reload=reload /> })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_text_by_kind() {
        assert_eq!(value_text(ReportKind::TopClients, 1234.5), "R$\u{a0}1.234,50");
        assert_eq!(value_text(ReportKind::AppointmentEfficiency, 41.6), "42");
    }
}
