//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use shopadmin_core::config::AuthConfig;
use shopadmin_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens issued by [`super::JwtEncoder`].
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature validity, expiration, and that the token
    /// type is Access.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::authentication(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::authentication(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use shopadmin_core::config::AuthConfig;
    use shopadmin_entity::user::{User, UserRole, UserStatus};

    use crate::jwt::JwtEncoder;

    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret-do-not-use".to_string(),
            jwt_access_ttl_minutes: 15,
            jwt_refresh_ttl_hours: 24,
            password_min_length: 10,
        }
    }

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username: "manager01".to_string(),
            email: Some("manager01@example.com".to_string()),
            password_hash: "$argon2id$unused".to_string(),
            display_name: None,
            role: UserRole::Manager,
            status: UserStatus::Active,
            tenant_id: Some(Uuid::new_v4()),
            last_login_at: None,
            created_by: None,
            updated_by: None,
            user_ip: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn access_token_round_trip() {
        let cfg = config();
        let user = sample_user();
        let pair = JwtEncoder::new(&cfg).generate_token_pair(&user).unwrap();

        let claims = JwtDecoder::new(&cfg)
            .decode_access_token(&pair.access_token)
            .unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.tenant_id, user.tenant_id);
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(!claims.is_expired());
    }

    #[test]
    fn refresh_token_rejected_as_access() {
        let cfg = config();
        let pair = JwtEncoder::new(&cfg)
            .generate_token_pair(&sample_user())
            .unwrap();

        let err = JwtDecoder::new(&cfg)
            .decode_access_token(&pair.refresh_token)
            .unwrap_err();
        assert!(err.message.contains("expected access token"));
    }

    #[test]
    fn wrong_secret_rejected() {
        let pair = JwtEncoder::new(&config())
            .generate_token_pair(&sample_user())
            .unwrap();

        let mut other = config();
        other.jwt_secret = "a-different-secret".to_string();
        assert!(
            JwtDecoder::new(&other)
                .decode_access_token(&pair.access_token)
                .is_err()
        );
    }
}
