use crate::domain::a005_appointment::ui::details::AppointmentDetails;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, BadgeVariant, Button};
use crate::shared::date_utils::{format_date, today};
use crate::shared::dialogs::confirm;
use crate::shared::http::{item_path, ApiClient};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use chrono::NaiveDate;
use contracts::domain::a005_appointment::{Appointment, AppointmentStatus};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::masks::whatsapp_link;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_appointments(api: &ApiClient) -> Result<Vec<Appointment>, ApiError> {
    api.get(&Appointment::api_path()).await
}

async fn delete_appointment(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&item_path(&Appointment::api_path(), id)).await
}

/// По дате и времени; записи без даты в конце
fn sorted(mut items: Vec<Appointment>) -> Vec<Appointment> {
    items.sort_by(|a, b| {
        let (da, ha) = a.sort_key();
        let (db, hb) = b.sort_key();
        match (da, db) {
            (Some(x), Some(y)) => x.cmp(&y).then(ha.cmp(&hb)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => ha.cmp(&hb),
        }
    });
    items
}

/// Открытые записи на сегодня
fn open_today(items: &[Appointment], today: NaiveDate) -> usize {
    items
        .iter()
        .filter(|a| a.status == AppointmentStatus::Aberto && a.day() == Some(today))
        .count()
}

#[component]
pub fn AppointmentList() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal::<Vec<Appointment>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<Option<String>>);

    let fetch = move || {
        let api = session.client();
        spawn_local(async move {
            match fetch_appointments(&api).await {
                Ok(v) => {
                    set_items.set(sorted(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar agendamentos."),
                )),
            }
        });
    };

    let handle_delete = move |appointment: Appointment| {
        if !confirm(&format!("Excluir o agendamento de {}?", appointment.name)) {
            return;
        }
        let api = session.client();
        spawn_local(async move {
            match delete_appointment(&api, appointment.id.value()).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao excluir agendamento."),
                )),
            }
        });
    };

    fetch();

    view! {
        <PageFrame page_id="a005_appointment--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Agendamentos"
                subtitle=Signal::derive(move || Some(format!("{} para hoje", items.with(|all| open_today(all, today())))))
            >
                <Button on_click=Callback::new(move |_| editing.set(Some(None)))>
                    {icon("plus")}
                    "Novo agendamento"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorBox message=error />

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Data"</th>
                                <th class="table__header-cell">"Hora"</th>
                                <th class="table__header-cell">"Nome"</th>
                                <th class="table__header-cell">"Telefone"</th>
                                <th class="table__header-cell">"Observação"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|a| (a.id.clone(), a.status, a.hour.clone(), a.date.clone())
                                children=move |appointment| {
                                    let id = appointment.id.value().to_string();
                                    let wa = whatsapp_link(&appointment.telephone);
                                    let for_delete = appointment.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_date(&appointment.date)}</td>
                                            <td class="table__cell">{appointment.hour.clone()}</td>
                                            <td class="table__cell">{appointment.name.clone()}</td>
                                            <td class="table__cell">
                                                {appointment.telephone.clone()}
                                                {wa.map(|href| view! {
                                                    <a class="table__link" href=href target="_blank" rel="noopener" title="WhatsApp">
                                                        {icon("message")}
                                                    </a>
                                                })}
                                            </td>
                                            <td class="table__cell">{appointment.observation.clone()}</td>
                                            <td class="table__cell">
                                                <Badge variant=appointment.status.badge_variant()>{appointment.status.label()}</Badge>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| editing.set(Some(Some(id.clone()))))>
                                                    {icon("edit")}
                                                </Button>
                                                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| handle_delete(for_delete.clone()))>
                                                    {icon("delete")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            {move || editing.get().map(|id| view! {
                <div class="modal-overlay">
                    <div class="modal-surface">
                        <AppointmentDetails
                            id=id
                            on_saved=Callback::new(move |_| {
                                editing.set(None);
                                fetch();
                            })
                            on_cancel=Callback::new(move |_| editing.set(None))
                        />
                    </div>
                </div>
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: &str, date: &str, hour: &str, status: &str) -> Appointment {
        serde_json::from_str(&format!(
            r#"{{"_id":"{}","name":"Ana","telephone":"11999998888","date":"{}","hour":"{}","status":"{}"}}"#,
            id, date, hour, status
        ))
        .unwrap()
    }

    #[test]
    fn test_sorted_by_date_then_hour() {
        let items = sorted(vec![
            appointment("a", "2025-03-11", "09:00", "Aberto"),
            appointment("b", "2025-03-10", "15:30", "Aberto"),
            appointment("c", "2025-03-10", "08:00", "Compareceu"),
        ]);
        let ids: Vec<&str> = items.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_open_today_counts_only_open() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let items = vec![
            appointment("a", "2025-03-10", "09:00", "Aberto"),
            appointment("b", "2025-03-10", "10:00", "Faltou"),
            appointment("c", "2025-03-11", "10:00", "Aberto"),
        ];
        assert_eq!(open_today(&items, today), 1);
    }
}
