//! Novo parcelamento: форма с живым предпросмотром графика платежей.

mod model;
mod view;
mod view_model;

pub use view::InstallmentPlanForm;
