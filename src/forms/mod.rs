//! src/forms/mod.rs
mod redirect;
mod reset_password;
mod state;
mod verify;

pub use redirect::{Navigator, Redirect};
pub use reset_password::ResetPasswordForm;
pub use state::FormState;
pub use verify::VerificationForm;
