pub mod aggregation;
pub mod api_error;
pub mod installments;
pub mod list_query;
pub mod masks;
pub mod money;
pub mod serde_helpers;
pub mod validation;

#[cfg(test)]
mod proptests;
