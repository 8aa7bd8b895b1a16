pub mod aggregate;

pub use aggregate::{
    Payment, PaymentCondition, PaymentMethod, Sale, SaleDraft, SaleId, SaleItem, SaleItemDraft,
    SalePayload, SaleStatus, SellerRef, StatusPatch,
};
