pub mod installment_plan;
pub mod list;
