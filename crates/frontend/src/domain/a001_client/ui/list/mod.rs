use crate::domain::a001_client::ui::details::ClientDetails;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_date_opt;
use crate::shared::dialogs::confirm;
use crate::shared::http::{item_path, ApiClient};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use contracts::domain::a001_client::Client;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::masks::{format_cpf, format_phone, whatsapp_link};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Состояние модальной формы: закрыта, новый клиент, редактирование
#[derive(Debug, Clone, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(String),
}

async fn fetch_clients(api: &ApiClient) -> Result<Vec<Client>, ApiError> {
    api.get(&Client::api_path()).await
}

async fn delete_client(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&item_path(&Client::api_path(), id)).await
}

#[component]
pub fn ClientList() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal::<Vec<Client>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let search = RwSignal::new(String::new());
    let editing = RwSignal::new(Editing::Closed);

    let fetch = move || {
        let api = session.client();
        set_loading.set(true);
        spawn_local(async move {
            match fetch_clients(&api).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar clientes."),
                )),
            }
            set_loading.set(false);
        });
    };

    let handle_delete = move |client: Client| {
        if !confirm(&format!("Excluir o cliente {}?", client.full_name)) {
            return;
        }
        let api = session.client();
        spawn_local(async move {
            match delete_client(&api, client.id.value()).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao excluir cliente."),
                )),
            }
        });
    };

    // Фильтрация на клиенте: имя, CPF, телефон
    let visible = move || {
        let term = search.get();
        items.with(|all| {
            all.iter()
                .filter(|c| c.matches(&term))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    fetch();

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <PageHeader title="Clientes" subtitle=Signal::derive(move || Some(format!("{} cadastrados", items.with(Vec::len))))>
                <Button on_click=Callback::new(move |_| editing.set(Editing::New))>
                    {icon("plus")}
                    "Novo cliente"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| fetch())>
                    {icon("refresh")}
                    "Atualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <SearchInput
                    placeholder="Buscar por nome, CPF ou telefone"
                    on_search=Callback::new(move |term| search.set(term))
                />

                <ErrorBox message=error />

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Nome"</th>
                                <th class="table__header-cell">"CPF"</th>
                                <th class="table__header-cell">"Telefone"</th>
                                <th class="table__header-cell">"Nascimento"</th>
                                <th class="table__header-cell">"Vencimento da receita"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible();
                                if rows.is_empty() && !loading.get() {
                                    return view! {
                                        <tr><td class="table__cell table__cell--empty" colspan="6">"Nenhum cliente encontrado."</td></tr>
                                    }.into_any();
                                }
                                rows.into_iter().map(|client| {
                                    let id = client.id.value().to_string();
                                    let wa = whatsapp_link(&client.phone);
                                    let for_delete = client.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{client.full_name.clone()}</td>
                                            <td class="table__cell">{format_cpf(&client.cpf)}</td>
                                            <td class="table__cell">
                                                {format_phone(&client.phone)}
                                                {wa.map(|href| view! {
                                                    <a class="table__link" href=href target="_blank" rel="noopener" title="WhatsApp">
                                                        {icon("message")}
                                                    </a>
                                                })}
                                            </td>
                                            <td class="table__cell">{format_date_opt(client.birth_date.as_deref())}</td>
                                            <td class="table__cell">{format_date_opt(client.prescription.vencimento_receita.as_deref())}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| editing.set(Editing::Existing(id.clone())))>
                                                    {icon("edit")}
                                                </Button>
                                                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| handle_delete(for_delete.clone()))>
                                                    {icon("delete")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            {move || {
                let id = match editing.get() {
                    Editing::Closed => return None,
                    Editing::New => None,
                    Editing::Existing(id) => Some(id),
                };
                Some(view! {
                    <div class="modal-overlay">
                        <div class="modal-surface">
                            <ClientDetails
                                id=id
                                on_saved=Callback::new(move |_| {
                                    editing.set(Editing::Closed);
                                    fetch();
                                })
                                on_cancel=Callback::new(move |_| editing.set(Editing::Closed))
                            />
                        </div>
                    </div>
                })
            }}
        </PageFrame>
    }
}
