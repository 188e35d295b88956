//! src/pages/reset_password.rs
use super::{query_param, Mount};
use crate::api_client::ApiClient;
use crate::forms::ResetPasswordForm;
use url::Url;

/// Mount the reset form once the page's location is available.
///
/// A missing `token` parameter is not an error here; the form reports
/// "Invalid or missing token." at submit time.
pub fn mount(api_client: ApiClient, location: Option<&Url>) -> Mount<ResetPasswordForm> {
    match location {
        None => Mount::Pending,
        Some(url) => Mount::Ready(ResetPasswordForm::new(
            api_client,
            query_param(url, "token"),
        )),
    }
}
