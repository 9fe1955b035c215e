//! User management (admin only) and password changes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shopadmin_auth::password::{PasswordHasher, PasswordValidator};
use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_core::types::{ListRequest, PageResponse};
use shopadmin_database::repositories::subscription::SubscriptionRepository;
use shopadmin_database::repositories::plan::PlanRepository;
use shopadmin_database::repositories::user::UserRepository;
use shopadmin_entity::user::{CreateUser, UpdateUser, User, UserRole, UserStatus};

use crate::context::RequestContext;

/// Data for creating a user, with the plaintext password still attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub tenant_id: Option<Uuid>,
}

/// Partial update of a user record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

/// Handles user administration.
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    subscription_repo: Arc<SubscriptionRepository>,
    plan_repo: Arc<PlanRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        subscription_repo: Arc<SubscriptionRepository>,
        plan_repo: Arc<PlanRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            subscription_repo,
            plan_repo,
            hasher,
            validator,
        }
    }

    /// Lists users, optionally filtered to one tenant.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        tenant_id: Option<Uuid>,
        req: &ListRequest,
    ) -> AppResult<PageResponse<User>> {
        ctx.require_admin()?;
        self.user_repo.list(tenant_id, req).await
    }

    /// Fetches a single user by ID.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<User> {
        ctx.require_admin()?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a new user with a hashed password.
    pub async fn create(&self, ctx: &RequestContext, input: CreateUserInput) -> AppResult<User> {
        ctx.require_admin()?;

        match (input.role, input.tenant_id) {
            (UserRole::Admin, Some(_)) => {
                return Err(AppError::validation("Admin users cannot belong to a tenant"));
            }
            (UserRole::Manager | UserRole::Staff, None) => {
                return Err(AppError::validation(
                    "Manager and staff users must belong to a tenant",
                ));
            }
            _ => {}
        }

        self.validator.validate(&input.password)?;

        if let Some(tenant_id) = input.tenant_id {
            self.check_user_limit(tenant_id).await?;
        }

        // The unique constraints back these up; checking first gives a
        // clearer message than the constraint name mapping.
        if self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username is already taken"));
        }
        if let Some(email) = &input.email {
            if self.user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::conflict("Email is already in use"));
            }
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: input.username,
                email: input.email,
                password_hash,
                display_name: input.display_name,
                role: input.role,
                tenant_id: input.tenant_id,
                created_by: Some(ctx.user_id),
                user_ip: ctx.audit_ip(),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, created_by = %ctx.user_id, "User created");

        Ok(user)
    }

    /// Applies a partial update to a user.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateUserInput,
    ) -> AppResult<User> {
        ctx.require_admin()?;

        if let Some(email) = &input.email {
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::conflict("Email is already in use"));
                }
            }
        }

        // Demoting or deactivating yourself locks the console.
        if id == ctx.user_id {
            if input.role.is_some_and(|r| r != UserRole::Admin) {
                return Err(AppError::validation("Cannot change your own role"));
            }
            if input.status == Some(UserStatus::Inactive) {
                return Err(AppError::validation("Cannot deactivate your own account"));
            }
        }

        let user = self
            .user_repo
            .update(
                id,
                &UpdateUser {
                    email: input.email,
                    display_name: input.display_name,
                    role: input.role,
                    status: input.status,
                    updated_by: Some(ctx.user_id),
                    user_ip: ctx.audit_ip(),
                },
            )
            .await?;

        info!(user_id = %id, updated_by = %ctx.user_id, "User updated");

        Ok(user)
    }

    /// Deletes a user. Self-deletion is rejected.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        if id == ctx.user_id {
            return Err(AppError::validation("Cannot delete your own account"));
        }

        if !self.user_repo.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %id, deleted_by = %ctx.user_id, "User deleted");
        Ok(())
    }

    /// Changes a user's password.
    ///
    /// Users changing their own password must supply the current one;
    /// admins may reset anyone's without it.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        target_id: Uuid,
        current_password: Option<&str>,
        new_password: &str,
    ) -> AppResult<()> {
        if target_id != ctx.user_id {
            ctx.require_admin()?;
        }

        let user = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if target_id == ctx.user_id {
            let current = current_password.ok_or_else(|| {
                AppError::validation("Current password is required")
            })?;
            if !self.hasher.verify_password(current, &user.password_hash)? {
                return Err(AppError::authentication("Current password is incorrect"));
            }
            self.validator.validate_not_same(current, new_password)?;
        }

        self.validator.validate(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(target_id, &new_hash).await?;

        info!(user_id = %target_id, changed_by = %ctx.user_id, "Password changed");
        Ok(())
    }

    /// Rejects user creation beyond the tenant's subscribed user limit.
    async fn check_user_limit(&self, tenant_id: Uuid) -> AppResult<()> {
        let Some(subscription) = self
            .subscription_repo
            .find_active_for_tenant(tenant_id)
            .await?
        else {
            return Ok(());
        };
        let Some(plan) = self.plan_repo.find_by_id(subscription.plan_id).await? else {
            return Ok(());
        };

        let current = self.user_repo.count_by_tenant(tenant_id).await?;
        if current >= plan.max_users as u64 {
            return Err(AppError::conflict(format!(
                "Tenant has reached the plan limit of {} users",
                plan.max_users
            )));
        }
        Ok(())
    }
}
