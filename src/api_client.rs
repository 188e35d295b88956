//! src/api_client.rs
use crate::domain::{PasswordResetRequest, VerificationRequest};
use crate::error_chain_fmt;
use reqwest::Client;
use secrecy::ExposeSecret;

/// Client for the application's own backend endpoints.
///
/// One outstanding request per form at a time; re-submission is prevented by
/// the form's loading state, not here. No timeout is configured: a hung call
/// blocks only the interaction it belongs to.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

#[derive(thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("The server rejected the request.")]
    Rejected { message: Option<String> },
    #[error("Failed to reach the server.")]
    Network(#[from] reqwest::Error),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ApiError {
    /// The message shown inline to the user: the server-provided one when
    /// present, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
            } => message.clone(),
            _ => "Something went wrong.".into(),
        }
    }
}

#[derive(serde::Serialize)]
struct ResetPasswordBody<'a> {
    token: &'a str,
    password: &'a str,
}

#[derive(serde::Serialize)]
struct VerifyBody<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    #[tracing::instrument(name = "Submitting a password reset", skip(self, request))]
    pub async fn reset_password(&self, request: &PasswordResetRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/reset-password", self.base_url);
        let body = ResetPasswordBody {
            token: request.token(),
            password: request.password().expose_secret(),
        };
        let response = self.http_client.post(&url).json(&body).send().await?;
        Self::interpret(response).await
    }

    #[tracing::instrument(
        name = "Submitting a verification code",
        skip(self, request),
        fields(email = %request.email())
    )]
    pub async fn verify_email(&self, request: &VerificationRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/verify", self.base_url);
        let body = VerifyBody {
            email: request.email(),
            code: request.code(),
        };
        let response = self.http_client.post(&url).json(&body).send().await?;
        Self::interpret(response).await
    }

    /// Any non-2xx status is a failure; the error body's `message` field is
    /// surfaced when the server provides one.
    async fn interpret(response: reqwest::Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            return Ok(());
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::Rejected { message })
    }
}
