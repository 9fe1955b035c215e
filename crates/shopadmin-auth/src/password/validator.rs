//! Password policy enforcement for new passwords.

use shopadmin_core::config::AuthConfig;
use shopadmin_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length as usize,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Password must contain at least one uppercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(AppError::validation(
                "Password must contain at least one lowercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        if !password.chars().any(|c| !c.is_alphanumeric()) {
            return Err(AppError::validation(
                "Password must contain at least one special character",
            ));
        }

        // Use zxcvbn for entropy check
        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password with more entropy.",
            ));
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator {
            min_length: 10,
        }
    }

    #[test]
    fn rejects_short_passwords() {
        let err = validator().validate("Ab1!").unwrap_err();
        assert!(err.message.contains("at least 10 characters"));
    }

    #[test]
    fn rejects_missing_character_classes() {
        let v = validator();
        assert!(v.validate("alllowercase1!").is_err());
        assert!(v.validate("ALLUPPERCASE1!").is_err());
        assert!(v.validate("NoDigitsHere!!").is_err());
        assert!(v.validate("NoSpecials123A").is_err());
    }

    #[test]
    fn rejects_low_entropy_passwords() {
        // Meets all character classes but is a trivially guessable pattern.
        assert!(validator().validate("Password1!").is_err());
    }

    #[test]
    fn accepts_strong_password() {
        assert!(validator().validate("tricky-Otter#91-lamp").is_ok());
    }

    #[test]
    fn rejects_unchanged_password() {
        let v = validator();
        assert!(v.validate_not_same("same-One!2", "same-One!2").is_err());
        assert!(v.validate_not_same("old-One!2a", "new-One!2b").is_ok());
    }
}
