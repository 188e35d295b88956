//! src/email_client.rs
use crate::domain::{RecipientEmail, RecipientName};
use crate::error_chain_fmt;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use tera::Tera;

const CONFIRMATION_TEMPLATE_NAME: &str = "confirmation.html";
const CONFIRMATION_TEMPLATE: &str = "\
<h2>Hi {{ name }},</h2>
<p>Thank you for choosing our <strong>{{ service }}</strong> service.</p>
<p>We've received your consultation request and will contact you shortly.</p>
<p><em>- The {{ sender_name }}</em></p>
";

const CONFIRMATION_SUBJECT: &str = "Your Consultation Request Has Been Received!";

/// Client for the outbound mail provider's REST API.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: RecipientEmail,
    sender_name: String,
    username: String,
    password: Secret<String>,
    templates: Tera,
}

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("Failed to render the confirmation email body.")]
    Template(#[from] tera::Error),
    #[error("Failed to deliver the email.")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

#[derive(serde::Deserialize)]
struct DeliveryReceipt {
    #[serde(rename = "MessageID")]
    message_id: String,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: RecipientEmail,
        sender_name: String,
        username: String,
        password: Secret<String>,
    ) -> Result<Self, tera::Error> {
        let mut templates = Tera::default();
        templates.add_raw_template(CONFIRMATION_TEMPLATE_NAME, CONFIRMATION_TEMPLATE)?;
        Ok(Self {
            http_client: Client::new(),
            base_url,
            sender,
            sender_name,
            username,
            password,
            templates,
        })
    }

    /// Render the confirmation template and hand the message to the provider.
    ///
    /// Delivery faults are not retried or recorded; the error is the caller's
    /// to deal with.
    #[tracing::instrument(
        name = "Sending a confirmation email",
        skip(self, recipient, name),
        fields(recipient_email = %recipient)
    )]
    pub async fn send_confirmation(
        &self,
        recipient: &RecipientEmail,
        name: &RecipientName,
        service: &str,
    ) -> Result<(), SendEmailError> {
        let mut context = tera::Context::new();
        context.insert("name", name.as_ref());
        context.insert("service", service);
        context.insert("sender_name", &self.sender_name);
        let html_body = self.templates.render(CONFIRMATION_TEMPLATE_NAME, &context)?;

        let url = format!("{}/email", self.base_url);
        let from = format!("{} <{}>", self.sender_name, self.sender.as_ref());
        let request_body = SendEmailRequest {
            from: &from,
            to: recipient.as_ref(),
            subject: CONFIRMATION_SUBJECT,
            html_body: &html_body,
        };
        let receipt = self
            .http_client
            .post(&url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?
            .json::<DeliveryReceipt>()
            .await?;

        tracing::info!("Confirmation email sent: {}", receipt.message_id);
        Ok(())
    }
}
