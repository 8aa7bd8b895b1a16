use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::Button;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::domain::a001_client::{Client, ClientRef};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сколько совпадений показывать под полем поиска
pub const PICKER_LIMIT: usize = 8;

async fn fetch_clients(api: &ApiClient) -> Result<Vec<Client>, ApiError> {
    api.get(&Client::api_path()).await
}

/// Клиенты, подходящие под строку поиска (пустая строка - никого)
pub fn matching_clients(clients: &[Client], term: &str) -> Vec<Client> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    clients
        .iter()
        .filter(|c| c.matches(term))
        .take(PICKER_LIMIT)
        .cloned()
        .collect()
}

/// Выбор клиента для продажи или парцелирования: поиск по справочнику,
/// загруженному один раз при открытии формы.
#[component]
pub fn ClientPicker(
    #[prop(into)]
    selected: Signal<Option<ClientRef>>,
    on_select: Callback<Option<ClientRef>>,
) -> impl IntoView {
    let session = use_session();
    let clients = RwSignal::new(Vec::<Client>::new());
    let term = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let api = session.client();
    spawn_local(async move {
        match fetch_clients(&api).await {
            Ok(v) => clients.set(v),
            Err(e) => error.set(Some(
                session.error_message(&e, "Erro ao carregar clientes."),
            )),
        }
    });

    view! {
        <div class="picker">
            {move || match selected.get() {
                Some(client) => view! {
                    <div class="picker__selected">
                        {icon("user")}
                        <strong>{client.full_name}</strong>
                        <Button variant="ghost" size="sm" on_click=Callback::new(move |_| on_select.run(None))>
                            "Trocar"
                        </Button>
                    </div>
                }.into_any(),
                None => view! {
                    <SearchInput
                        placeholder="Buscar cliente por nome, CPF ou telefone"
                        on_search=Callback::new(move |t| term.set(t))
                    />
                    <ul class="picker__results">
                        {move || {
                            let t = term.get();
                            clients.with(|all| matching_clients(all, &t))
                                .into_iter()
                                .map(|client| {
                                    let label = format!("{} - {}", client.full_name, client.cpf);
                                    let value = client.to_ref();
                                    view! {
                                        <li class="picker__item" on:click=move |_| {
                                            term.set(String::new());
                                            on_select.run(Some(value.clone()));
                                        }>
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                }.into_any(),
            }}
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_clients() {
        let clients: Vec<Client> = serde_json::from_str(
            r#"[{"_id":"1","fullName":"Ana Souza","cpf":"111.222.333-44","phone":"(11) 98888-7777"},
                {"_id":"2","fullName":"Bruno Lima","cpf":"555.666.777-88","phone":"(21) 3333-4444"}]"#,
        )
        .unwrap();
        assert!(matching_clients(&clients, "  ").is_empty());
        assert_eq!(matching_clients(&clients, "souza").len(), 1);
        assert_eq!(matching_clients(&clients, "3333")[0].full_name, "Bruno Lima");
    }
}
