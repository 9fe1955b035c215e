//! The list query contract shared by every resource.
//!
//! Every list endpoint accepts the same five parameters
//! (`page`, `page_size`, `search`, `sort_by`, `sort_order`) and returns a
//! [`crate::types::pagination::PageResponse`].

use serde::{Deserialize, Serialize};

use super::pagination::PageRequest;
use super::sorting::SortDirection;

/// A fully-parsed list query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequest {
    /// Page and page size (validated, 1-based).
    pub page: PageRequest,
    /// Free-text substring search over the resource's searchable fields.
    pub search: Option<String>,
    /// Requested sort column, validated per resource before use.
    pub sort_by: Option<String>,
    /// Sort direction, descending by default.
    pub sort_order: SortDirection,
}

impl ListRequest {
    /// Create a request for the given page with no search or sort override.
    pub fn page(page: u64, page_size: u64) -> Self {
        Self {
            page: PageRequest::new(page, page_size),
            ..Self::default()
        }
    }

    /// Return the `ILIKE` pattern for the search term.
    ///
    /// An absent or blank term yields `%%`, which matches every row (search
    /// columns are `COALESCE`d to the empty string in the generated SQL).
    pub fn search_pattern(&self) -> String {
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => format!("%{}%", escape_like(term)),
            _ => "%%".to_string(),
        }
    }
}

/// Escape `ILIKE` metacharacters in a user-supplied search term so that
/// `%` and `_` match literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pattern_wraps_term() {
        let req = ListRequest {
            search: Some("wireless mouse".to_string()),
            ..Default::default()
        };
        assert_eq!(req.search_pattern(), "%wireless mouse%");
    }

    #[test]
    fn test_blank_search_matches_everything() {
        assert_eq!(ListRequest::default().search_pattern(), "%%");
        let req = ListRequest {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(req.search_pattern(), "%%");
    }

    #[test]
    fn test_like_metacharacters_are_escaped() {
        let req = ListRequest {
            search: Some("100%_off".to_string()),
            ..Default::default()
        };
        assert_eq!(req.search_pattern(), "%100\\%\\_off%");
    }
}
