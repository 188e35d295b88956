//! src/domain/mod.rs
mod password_reset;
mod recipient_email;
mod recipient_name;
mod verification;

pub use password_reset::{PasswordResetError, PasswordResetRequest};
pub use recipient_email::RecipientEmail;
pub use recipient_name::RecipientName;
pub use verification::VerificationRequest;
