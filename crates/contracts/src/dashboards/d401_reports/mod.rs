pub mod dto;

pub use dto::{
    to_bars, BarRow, CashFlowPoint, NamedValue, ReportKind, RevenuePoint, TopClient,
};
