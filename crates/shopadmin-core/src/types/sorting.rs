//! Sorting types for list endpoints.
//!
//! Sort fields requested by clients are never interpolated into SQL
//! directly: they are resolved against a per-resource [`SortableFields`]
//! allow-list first, and unknown fields fall back to the resource's
//! default sort column.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Desc
    }
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Per-resource allow-list of sortable columns.
///
/// Returned column names are always `'static` members of the list, so the
/// resolved field can be spliced into an `ORDER BY` clause without any
/// injection risk.
#[derive(Debug, Clone, Copy)]
pub struct SortableFields {
    allowed: &'static [&'static str],
    default_field: &'static str,
}

impl SortableFields {
    /// Create an allow-list. `default_field` is used whenever the requested
    /// field is absent or not in the list.
    pub const fn new(allowed: &'static [&'static str], default_field: &'static str) -> Self {
        Self {
            allowed,
            default_field,
        }
    }

    /// Resolve a requested sort field to an allowed column.
    ///
    /// Unknown fields never error the query path; they resolve to the
    /// default column instead.
    pub fn resolve(&self, requested: Option<&str>) -> &'static str {
        match requested {
            Some(field) => self
                .allowed
                .iter()
                .find(|allowed| **allowed == field)
                .copied()
                .unwrap_or(self.default_field),
            None => self.default_field,
        }
    }

    /// The default sort column.
    pub fn default_field(&self) -> &'static str {
        self.default_field
    }

    /// Whether the given field is in the allow-list.
    pub fn contains(&self, field: &str) -> bool {
        self.allowed.iter().any(|allowed| *allowed == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: SortableFields =
        SortableFields::new(&["name", "price_cents", "created_at"], "created_at");

    #[test]
    fn test_resolve_allowed_field() {
        assert_eq!(FIELDS.resolve(Some("name")), "name");
        assert_eq!(FIELDS.resolve(Some("price_cents")), "price_cents");
    }

    #[test]
    fn test_unknown_field_falls_back_to_default() {
        assert_eq!(FIELDS.resolve(Some("password_hash")), "created_at");
        assert_eq!(FIELDS.resolve(Some("1; DROP TABLE products")), "created_at");
        assert_eq!(FIELDS.resolve(None), "created_at");
    }

    #[test]
    fn test_default_direction_is_descending() {
        assert_eq!(SortDirection::default(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
    }
}
