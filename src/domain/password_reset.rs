//! src/domain/password_reset.rs
use secrecy::Secret;

/// A reset request that has passed local validation.
///
/// Construction is the only way to get one, so a request with a missing token
/// or mismatched passwords never reaches the network boundary.
#[derive(Debug)]
pub struct PasswordResetRequest {
    token: String,
    password: Secret<String>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PasswordResetError {
    #[error("Invalid or missing token.")]
    MissingToken,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl PasswordResetRequest {
    pub fn new(
        token: Option<&str>,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Self, PasswordResetError> {
        let token = match token {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => return Err(PasswordResetError::MissingToken),
        };
        if new_password != confirm_password {
            return Err(PasswordResetError::PasswordMismatch);
        }
        Ok(Self {
            token,
            password: Secret::new(new_password.to_owned()),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}
