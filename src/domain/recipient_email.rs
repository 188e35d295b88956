//! src/domain/recipient_email.rs
use validator::validate_email;

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientEmail(String);

impl RecipientEmail {
    /// Returns an instance of `RecipientEmail` if the input satisfies
    /// validation constraints on email addresses, an error message otherwise.
    pub fn parse(s: String) -> Result<RecipientEmail, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }
}

impl AsRef<str> for RecipientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
