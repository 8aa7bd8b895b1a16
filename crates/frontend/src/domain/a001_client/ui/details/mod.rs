//! Форма клиента (MVVM):
//! - model.rs: вызовы API
//! - view_model.rs: состояние формы и команды
//! - view.rs: компонент Leptos

mod model;
mod view;
mod view_model;

pub use view::ClientDetails;
pub use view_model::ClientDetailsViewModel;
