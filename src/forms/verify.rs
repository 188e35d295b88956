//! src/forms/verify.rs
use super::{FormState, Redirect};
use crate::api_client::ApiClient;
use crate::domain::VerificationRequest;

/// The email verification form.
///
/// The address comes from the page's query string and is not user-editable;
/// the code is the only field. Only the submit control is disabled while a
/// request is pending.
pub struct VerificationForm {
    api_client: ApiClient,
    email: String,
    state: FormState,
}

impl VerificationForm {
    pub fn new(api_client: ApiClient, email: String) -> Self {
        Self {
            api_client,
            email,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn submit_disabled(&self) -> bool {
        self.state.is_loading()
    }

    /// Handle a submit of the verification code.
    ///
    /// On success the redirect is immediate and the loading state is left in
    /// place: navigation replaces the view, so there is nothing to re-enable.
    #[tracing::instrument(name = "Handling a verification submit", skip_all, fields(email = %self.email))]
    pub async fn submit(&mut self, code: &str) -> Option<Redirect> {
        self.state = FormState::Loading;

        let request = VerificationRequest::new(self.email.clone(), code.to_owned());
        match self.api_client.verify_email(&request).await {
            Ok(()) => Some(Redirect::to("/signin")),
            Err(e) => {
                tracing::warn!("Verification was not accepted: {:?}", e);
                self.state = FormState::Error(e.user_message());
                None
            }
        }
    }
}
