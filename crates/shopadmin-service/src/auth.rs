//! Login, token refresh, and current-user lookup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use shopadmin_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use shopadmin_auth::password::PasswordHasher;
use shopadmin_core::error::AppError;
use shopadmin_core::result::AppResult;
use shopadmin_database::repositories::user::UserRepository;
use shopadmin_entity::user::User;

use crate::context::RequestContext;

/// Handles authentication flows.
#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Authenticates a user by username and password.
    ///
    /// A missing user and a wrong password produce the same error so
    /// that login attempts cannot probe for valid usernames.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        ip_address: &str,
    ) -> AppResult<(User, TokenPair)> {
        let user = match self.user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => {
                warn!(username, ip = ip_address, "Login attempt for unknown user");
                return Err(AppError::authentication("Invalid username or password"));
            }
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(username, ip = ip_address, "Login attempt with wrong password");
            return Err(AppError::authentication("Invalid username or password"));
        }

        if !user.can_login() {
            warn!(username, ip = ip_address, "Login attempt on inactive account");
            return Err(AppError::authentication("Account is inactive"));
        }

        self.user_repo.update_last_login(user.id).await?;
        let tokens = self.encoder.generate_token_pair(&user)?;

        info!(user_id = %user.id, username, ip = ip_address, "User logged in");

        Ok((user, tokens))
    }

    /// Exchanges a valid refresh token for a fresh access token.
    ///
    /// The user is re-read so that role changes and deactivation take
    /// effect at refresh time rather than only at token expiry.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(String, DateTime<Utc>)> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        if !user.can_login() {
            return Err(AppError::authentication("Account is inactive"));
        }

        self.encoder.generate_access_token(&user)
    }

    /// Returns the full profile of the authenticated user.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
