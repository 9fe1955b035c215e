//! Generic list/paginate/sort/search query builder.
//!
//! Every repository's `list()` goes through [`ListQuery`], which renders the
//! COUNT and SELECT statements for the shared list contract:
//!
//! - free-text search is a case-insensitive substring match over the
//!   resource's searchable columns, bound as a single `ILIKE` pattern;
//! - the sort column is resolved against the resource's
//!   [`SortableFields`] allow-list, so a client-supplied `sort_by` never
//!   reaches SQL verbatim;
//! - LIMIT/OFFSET come from the validated [`PageRequest`] and are rendered
//!   as integers.
//!
//! Bind order convention: for tenant-scoped resources `$1` is an optional
//! tenant filter (`Option<Uuid>`) and `$2` the search pattern; unscoped
//! resources bind only the pattern as `$1`.

use shopadmin_core::types::list::ListRequest;
use shopadmin_core::types::sorting::SortableFields;

/// A per-resource list query definition.
#[derive(Debug, Clone, Copy)]
pub struct ListQuery {
    table: &'static str,
    searchable: &'static [&'static str],
    sortable: SortableFields,
}

/// Rendered SQL for one list request.
#[derive(Debug, Clone)]
pub struct BuiltListQuery {
    /// `SELECT COUNT(*) ...` over the matching rows.
    pub count_sql: String,
    /// `SELECT * ...` for the requested page.
    pub select_sql: String,
    /// The `ILIKE` pattern to bind for the search placeholder.
    pub pattern: String,
}

impl ListQuery {
    /// Define a list query for a table, its searchable columns, and its
    /// sortable-column allow-list.
    pub const fn new(
        table: &'static str,
        searchable: &'static [&'static str],
        sortable: SortableFields,
    ) -> Self {
        Self {
            table,
            searchable,
            sortable,
        }
    }

    /// The sortable-column allow-list for this resource.
    pub fn sortable(&self) -> &SortableFields {
        &self.sortable
    }

    /// Render the COUNT and SELECT statements for a request.
    ///
    /// When `tenant_scoped` is true the statements carry a
    /// `($1::uuid IS NULL OR tenant_id = $1)` filter and the search pattern
    /// binds as `$2`; otherwise the pattern binds as `$1`.
    pub fn build(&self, req: &ListRequest, tenant_scoped: bool) -> BuiltListQuery {
        let filter = tenant_scoped.then_some("($1::uuid IS NULL OR tenant_id = $1)");
        self.render(req, filter)
    }

    /// Like a tenant-scoped [`build`](Self::build), but rows with a NULL
    /// `tenant_id` match every scope. For resources that mix per-tenant
    /// and platform-wide records.
    pub fn build_including_global(&self, req: &ListRequest) -> BuiltListQuery {
        self.render(
            req,
            Some("($1::uuid IS NULL OR tenant_id = $1 OR tenant_id IS NULL)"),
        )
    }

    fn render(&self, req: &ListRequest, tenant_filter: Option<&str>) -> BuiltListQuery {
        let search_arg = if tenant_filter.is_some() { 2 } else { 1 };
        let search = self.search_clause(search_arg);

        let where_clause = match tenant_filter {
            Some(filter) => format!("WHERE {filter} AND {search}"),
            None => format!("WHERE {search}"),
        };

        let order_by = self.sortable.resolve(req.sort_by.as_deref());
        let direction = req.sort_order.as_sql();

        let count_sql = format!("SELECT COUNT(*) FROM {} {}", self.table, where_clause);
        let select_sql = format!(
            "SELECT * FROM {} {} ORDER BY {} {} LIMIT {} OFFSET {}",
            self.table,
            where_clause,
            order_by,
            direction,
            req.page.limit(),
            req.page.offset(),
        );

        BuiltListQuery {
            count_sql,
            select_sql,
            pattern: req.search_pattern(),
        }
    }

    /// Render the grouped `ILIKE` disjunction over the searchable columns.
    ///
    /// Columns are `COALESCE`d to the empty string so that NULLs still match
    /// the blank-search pattern `%%`.
    fn search_clause(&self, arg: usize) -> String {
        let parts: Vec<String> = self
            .searchable
            .iter()
            .map(|col| format!("COALESCE({col}::text, '') ILIKE ${arg}"))
            .collect();
        format!("({})", parts.join(" OR "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopadmin_core::types::pagination::PageRequest;
    use shopadmin_core::types::sorting::SortDirection;

    const PRODUCTS: ListQuery = ListQuery::new(
        "products",
        &["name", "sku", "description"],
        SortableFields::new(&["name", "sku", "price_cents", "created_at"], "created_at"),
    );

    const PLANS: ListQuery = ListQuery::new(
        "subscription_plans",
        &["name"],
        SortableFields::new(&["name", "price_cents", "created_at"], "created_at"),
    );

    fn request(sort_by: Option<&str>, order: SortDirection) -> ListRequest {
        ListRequest {
            page: PageRequest::new(2, 10),
            search: Some("mouse".to_string()),
            sort_by: sort_by.map(String::from),
            sort_order: order,
        }
    }

    #[test]
    fn test_scoped_select_shape() {
        let q = PRODUCTS.build(&request(Some("name"), SortDirection::Asc), true);
        assert_eq!(
            q.select_sql,
            "SELECT * FROM products \
             WHERE ($1::uuid IS NULL OR tenant_id = $1) AND \
             (COALESCE(name::text, '') ILIKE $2 OR COALESCE(sku::text, '') ILIKE $2 \
             OR COALESCE(description::text, '') ILIKE $2) \
             ORDER BY name ASC LIMIT 10 OFFSET 10"
        );
        assert_eq!(q.pattern, "%mouse%");
    }

    #[test]
    fn test_global_rows_match_every_scope() {
        const FAQS: ListQuery = ListQuery::new(
            "faqs",
            &["question", "answer"],
            SortableFields::new(&["display_order", "created_at"], "display_order"),
        );
        let q = FAQS.build_including_global(&request(None, SortDirection::Desc));
        assert!(
            q.select_sql
                .contains("WHERE ($1::uuid IS NULL OR tenant_id = $1 OR tenant_id IS NULL) AND")
        );
        assert!(q.count_sql.contains("OR tenant_id IS NULL"));
        assert!(q.select_sql.contains("ILIKE $2"));
    }

    #[test]
    fn test_unscoped_binds_pattern_first() {
        let q = PLANS.build(&request(None, SortDirection::Desc), false);
        assert!(q.count_sql.starts_with("SELECT COUNT(*) FROM subscription_plans"));
        assert!(q.select_sql.contains("ILIKE $1"));
        assert!(!q.select_sql.contains("$2"));
    }

    #[test]
    fn test_unknown_sort_field_falls_back() {
        let q = PRODUCTS.build(&request(Some("password_hash"), SortDirection::Asc), true);
        assert!(q.select_sql.contains("ORDER BY created_at ASC"));

        let q = PRODUCTS.build(
            &request(Some("created_at; DROP TABLE products"), SortDirection::Asc),
            true,
        );
        assert!(q.select_sql.contains("ORDER BY created_at ASC"));
        assert!(!q.select_sql.contains("DROP TABLE"));
    }

    #[test]
    fn test_direction_is_requested_one() {
        let asc = PRODUCTS.build(&request(Some("price_cents"), SortDirection::Asc), true);
        assert!(asc.select_sql.contains("ORDER BY price_cents ASC"));
        let desc = PRODUCTS.build(&request(Some("price_cents"), SortDirection::Desc), true);
        assert!(desc.select_sql.contains("ORDER BY price_cents DESC"));
    }

    #[test]
    fn test_limit_never_exceeds_page_size() {
        let req = ListRequest {
            page: PageRequest::new(1, 500),
            ..Default::default()
        };
        let q = PRODUCTS.build(&req, true);
        // Page size is clamped to the maximum before it reaches SQL.
        assert!(q.select_sql.ends_with("LIMIT 100 OFFSET 0"));
    }
}
