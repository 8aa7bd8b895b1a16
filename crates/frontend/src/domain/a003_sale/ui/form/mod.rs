//! Форма продажи: новая (`/vendas/nova`) и редактирование (`/vendas/{id}/editar`)

mod model;
mod view;
mod view_model;

pub use view::SaleForm;
