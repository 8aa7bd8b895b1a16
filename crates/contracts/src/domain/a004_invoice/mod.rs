pub mod aggregate;
pub mod installment_plan;

pub use aggregate::{
    month_name, ClientInfo, Invoice, InvoiceId, InvoiceMonthGroup, InvoiceStatus,
    InvoiceStatusFilter, MarkPaidRequest, MonthKey, MONTH_NAMES,
};
pub use installment_plan::{InstallmentPlanDraft, InstallmentPlanRequest, MAX_INSTALLMENTS};
