//! Компонент ячейки таблицы для денежных значений
//!
//! ```ignore
//! <TableCellMoney value=Signal::derive(move || Some(total)) />
//! <TableCellMoney value=amount color_by_sign=true bold=true />
//! ```

use contracts::shared::money::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Ячейка с суммой в реалах (`R$ 1.234,56`), выровненная по правому краю.
///
/// Пустое значение выводится как `R$ 0,00`.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Окрашивать по знаку: положительные зелёным, отрицательные красным
    #[prop(optional, default = false)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || format_currency(value.get());

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            match value.get() {
                Some(v) if v > 0.0 => styles.push("color: var(--color-success-700)"),
                Some(v) if v < 0.0 => styles.push("color: var(--color-error-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
