pub mod a001_client;
pub mod a002_product;
pub mod a003_sale;
pub mod a004_invoice;
pub mod a005_appointment;
pub mod a006_cash_register;
pub mod a007_service_order;
pub mod common;
