//! Page category constants.
//!
//! Every console page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_client--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity searchable: the id copied from the DOM
//! inspector leads straight to `domain/a001_client/`.

/// List of records with search/filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Dashboard and report pages.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other pages outside the shell.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a004_invoice--list"));
        assert!(!is_valid_page_id("a004_invoice"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("legacy"));
    }
}
