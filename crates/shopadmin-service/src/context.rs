//! Request context carrying the authenticated user and tenant scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting, with *which* role, and on
/// behalf of *which* tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
    /// The username (convenience field from JWT claims).
    pub username: String,
    /// Tenant the user belongs to (admins have none).
    pub tenant_id: Option<Uuid>,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: Uuid,
        role: UserRole,
        username: String,
        tenant_id: Option<Uuid>,
        ip_address: String,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user_id,
            role,
            username,
            tenant_id,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Returns whether the current user is at least a manager.
    pub fn is_manager_or_above(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Manager)
    }

    /// Requires the admin role.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization("Admin role required"))
        }
    }

    /// Requires the manager role or above.
    pub fn require_manager(&self) -> AppResult<()> {
        if self.is_manager_or_above() {
            Ok(())
        } else {
            Err(AppError::authorization("Manager role required"))
        }
    }

    /// Resolves the tenant filter a list query may run under.
    ///
    /// Admins may query any tenant (or all of them). Other users are
    /// pinned to their own tenant; requesting a different one is an
    /// authorization error.
    pub fn scope_tenant(&self, requested: Option<Uuid>) -> AppResult<Option<Uuid>> {
        if self.is_admin() {
            return Ok(requested);
        }
        let own = self.tenant_id.ok_or_else(|| {
            AppError::authorization("User is not associated with a tenant")
        })?;
        match requested {
            Some(other) if other != own => Err(AppError::authorization(
                "Cannot access another tenant's resources",
            )),
            _ => Ok(Some(own)),
        }
    }

    /// Checks that the caller may touch a record owned by `tenant_id`.
    pub fn ensure_tenant_access(&self, tenant_id: Uuid) -> AppResult<()> {
        self.scope_tenant(Some(tenant_id)).map(|_| ())
    }

    /// Audit value stored in `user_ip` columns.
    pub fn audit_ip(&self) -> Option<String> {
        Some(self.ip_address.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: UserRole, tenant_id: Option<Uuid>) -> RequestContext {
        RequestContext::new(
            Uuid::new_v4(),
            role,
            "tester".to_string(),
            tenant_id,
            "127.0.0.1".to_string(),
            None,
        )
    }

    #[test]
    fn admin_may_query_any_tenant() {
        let c = ctx(UserRole::Admin, None);
        let other = Uuid::new_v4();
        assert_eq!(c.scope_tenant(None).unwrap(), None);
        assert_eq!(c.scope_tenant(Some(other)).unwrap(), Some(other));
    }

    #[test]
    fn manager_is_pinned_to_own_tenant() {
        let own = Uuid::new_v4();
        let c = ctx(UserRole::Manager, Some(own));
        assert_eq!(c.scope_tenant(None).unwrap(), Some(own));
        assert_eq!(c.scope_tenant(Some(own)).unwrap(), Some(own));
        assert!(c.scope_tenant(Some(Uuid::new_v4())).is_err());
    }

    #[test]
    fn staff_cannot_pass_manager_check() {
        let c = ctx(UserRole::Staff, Some(Uuid::new_v4()));
        assert!(c.require_manager().is_err());
        assert!(c.require_admin().is_err());
        assert!(ctx(UserRole::Manager, None).require_manager().is_ok());
    }
}
