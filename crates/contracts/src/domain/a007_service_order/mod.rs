pub mod aggregate;

pub use aggregate::{
    ServiceOrder, ServiceOrderId, ServiceOrderStatus, ServicePrescription, ServiceProduct,
    ServiceSaleRef,
};
