//! src/forms/reset_password.rs
use super::{FormState, Redirect};
use crate::api_client::ApiClient;
use crate::domain::PasswordResetRequest;
use std::time::Duration;

/// The password reset form.
///
/// Holds the token extracted from the page's query string and the current UI
/// state. Local validation runs before anything touches the network; while a
/// request is in flight every input and the submit control are disabled.
pub struct ResetPasswordForm {
    api_client: ApiClient,
    token: Option<String>,
    state: FormState,
}

impl ResetPasswordForm {
    pub fn new(api_client: ApiClient, token: Option<String>) -> Self {
        Self {
            api_client,
            token,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Both password fields and the submit button are disabled while a
    /// request is pending.
    pub fn inputs_disabled(&self) -> bool {
        self.state.is_loading()
    }

    /// Handle a submit of the two password fields.
    ///
    /// On success the returned redirect points at the sign-in view, scheduled
    /// two seconds out so the confirmation message is visible first.
    #[tracing::instrument(name = "Handling a password reset submit", skip_all)]
    pub async fn submit(
        &mut self,
        new_password: &str,
        confirm_password: &str,
    ) -> Option<Redirect> {
        self.state = FormState::Idle;

        let request =
            match PasswordResetRequest::new(self.token.as_deref(), new_password, confirm_password)
            {
                Ok(request) => request,
                Err(e) => {
                    self.state = FormState::Error(e.to_string());
                    return None;
                }
            };

        self.state = FormState::Loading;
        let outcome = self.api_client.reset_password(&request).await;
        // Every branch below leaves the loading state, whatever the outcome.
        match outcome {
            Ok(()) => {
                self.state = FormState::Success;
                Some(Redirect::after("/signin", Duration::from_secs(2)))
            }
            Err(e) => {
                tracing::warn!("Password reset was not accepted: {:?}", e);
                self.state = FormState::Error(e.user_message());
                None
            }
        }
    }
}
