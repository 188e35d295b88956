//! src/domain/recipient_name.rs
use unicode_segmentation::UnicodeSegmentation;

/// The display name a confirmation email is addressed to.
#[derive(Debug, Clone)]
pub struct RecipientName(String);

impl RecipientName {
    /// Returns an instance of `RecipientName` if the input satisfies all
    /// our validation constraints on recipient names, an error message otherwise.
    pub fn parse(s: String) -> Result<RecipientName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters =
            s.chars().any(|g| forbidden_characters.contains(&g));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid recipient name.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RecipientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
