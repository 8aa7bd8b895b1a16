//! Форма новой операции по кассе

mod model;
mod view;
mod view_model;

pub use view::CashTransactionForm;
