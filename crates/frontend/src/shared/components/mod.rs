pub mod field_error;
pub mod page_header;
pub mod search_input;
pub mod stat_card;
pub mod table;
pub mod ui;
