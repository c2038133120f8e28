//! Page category constants.
//!
//! Every page rendered in the center column declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_order--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_order--list"));
        assert!(is_valid_page_id("d400_ecommerce--dashboard"));
        assert!(!is_valid_page_id("a001_order"));
        assert!(!is_valid_page_id("--list"));
    }
}
