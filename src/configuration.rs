//! src/configuration.rs
use crate::domain::RecipientEmail;
use crate::email_client::EmailClient;
use secrecy::Secret;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub email: EmailSettings,
}

/// Backend the form pages submit to.
#[derive(serde::Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

/// Outbound mail provider.
#[derive(serde::Deserialize, Clone)]
pub struct EmailSettings {
    pub base_url: String,
    pub username: String,
    pub password: Secret<String>,
    pub from: String,
    pub sender_name: String,
}

impl EmailSettings {
    pub fn sender(&self) -> Result<RecipientEmail, String> {
        RecipientEmail::parse(self.from.clone())
    }

    pub fn client(&self) -> Result<EmailClient, String> {
        let sender = self.sender()?;
        EmailClient::new(
            self.base_url.clone(),
            sender,
            self.sender_name.clone(),
            self.username.clone(),
            self.password.clone(),
        )
        .map_err(|e| format!("Failed to load the email templates: {}", e))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment. Default to `local`.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // e.g. `APP_EMAIL__BASE_URL=https://...` sets `Settings.email.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        // Provider credentials keep their legacy variable names.
        .set_override_option("email.username", std::env::var("EMAIL_USER").ok())?
        .set_override_option("email.password", std::env::var("EMAIL_PASS").ok())?
        .set_override_option("email.from", std::env::var("EMAIL_FROM").ok())?
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environments for the application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
