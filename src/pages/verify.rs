//! src/pages/verify.rs
use super::{query_param, Mount};
use crate::api_client::ApiClient;
use crate::forms::VerificationForm;
use url::Url;

/// Mount the verification form once the page's location is available.
/// A missing `email` parameter falls back to the empty string.
pub fn mount(api_client: ApiClient, location: Option<&Url>) -> Mount<VerificationForm> {
    match location {
        None => Mount::Pending,
        Some(url) => Mount::Ready(VerificationForm::new(
            api_client,
            query_param(url, "email").unwrap_or_default(),
        )),
    }
}
