pub mod dto;

pub use dto::{BirthdayEntry, DashboardStats};
