pub mod aggregate;

pub use aggregate::{
    CashRegisterSummary, CashTransaction, CashTransactionDto, CashTransactionId, TransactionKind,
};
