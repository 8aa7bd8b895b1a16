use crate::domain::a006_cash_register::ui::details::CashTransactionForm;
use crate::shared::components::field_error::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::date_utils::format_datetime;
use crate::shared::http::ApiClient;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;
use contracts::domain::a006_cash_register::{CashRegisterSummary, CashTransaction, TransactionKind};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_error::ApiError;
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_summary(api: &ApiClient) -> Result<CashRegisterSummary, ApiError> {
    api.get(&CashTransaction::api_path()).await
}

fn balance_tone(balance: f64) -> CardTone {
    if balance < 0.0 {
        CardTone::Bad
    } else {
        CardTone::Good
    }
}

#[component]
pub fn CashRegisterPage() -> impl IntoView {
    let session = use_session();
    let (summary, set_summary) = signal::<Option<CashRegisterSummary>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);

    let fetch = move || {
        let api = session.client();
        spawn_local(async move {
            match fetch_summary(&api).await {
                Ok(v) => {
                    set_summary.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(
                    session.error_message(&e, "Erro ao carregar o caixa."),
                )),
            }
        });
    };

    fetch();

    let amount = move |f: fn(&CashRegisterSummary) -> f64| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(|s| format_currency(Some(f(s))))))
    };

    view! {
        <PageFrame page_id="a006_cash_register--list" category=PAGE_CAT_LIST>
            <PageHeader title="Controle de Caixa">
                <Button on_click=Callback::new(move |_| show_form.set(true))>
                    {icon("plus")}
                    "Nova transação"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| fetch())>
                    {icon("refresh")}
                    "Atualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Saldo atual".to_string()
                        icon_name="cash"
                        value=amount(CashRegisterSummary::balance)
                        tone=Signal::derive(move || summary.with(|s| {
                            s.as_ref().map(|s| balance_tone(s.balance())).unwrap_or_default()
                        }))
                    />
                    <StatCard
                        label="Entradas".to_string()
                        icon_name="trending-up"
                        value=amount(CashRegisterSummary::total_in)
                    />
                    <StatCard
                        label="Saídas".to_string()
                        icon_name="trending-down"
                        value=amount(CashRegisterSummary::total_out)
                    />
                </div>

                <ErrorBox message=error />

                <Show when=move || show_form.get()>
                    <div class="panel">
                        <CashTransactionForm
                            on_saved=Callback::new(move |_| {
                                show_form.set(false);
                                fetch();
                            })
                            on_cancel=Callback::new(move |_| show_form.set(false))
                        />
                    </div>
                </Show>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Data"</th>
                                <th class="table__header-cell">"Descrição"</th>
                                <th class="table__header-cell">"Tipo"</th>
                                <th class="table__header-cell text-right">"Valor"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || summary.with(|s| s.as_ref().map(|s| s.transacoes.clone()).unwrap_or_default())
                                key=|t| t.id.clone()
                                children=move |tx| {
                                    let signed = tx.signed_amount();
                                    let variant = match tx.tipo {
                                        TransactionKind::Entrada => "success",
                                        TransactionKind::Saida => "error",
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_datetime(&tx.data)}</td>
                                            <td class="table__cell">{tx.descricao.clone()}</td>
                                            <td class="table__cell"><Badge variant=variant>{tx.tipo.label()}</Badge></td>
                                            <TableCellMoney value=Signal::derive(move || Some(signed)) color_by_sign=true />
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_balance_is_red() {
        assert_eq!(balance_tone(-0.01), CardTone::Bad);
        assert_eq!(balance_tone(0.0), CardTone::Good);
    }
}
