//! src/domain/verification.rs

/// The payload of a verification attempt: the address under verification
/// (taken from the page's query string) and the code the user typed in.
pub struct VerificationRequest {
    email: String,
    code: String,
}

impl VerificationRequest {
    pub fn new(email: String, code: String) -> Self {
        Self { email, code }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}
