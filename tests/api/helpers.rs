use account_pages::api_client::ApiClient;
use account_pages::forms::Navigator;
use account_pages::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use wiremock::MockServer;

// Set up tracing once; `TEST_LOG=true` sends it to stdout.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

/// A mock backend standing in for the application's API endpoints, plus an
/// `ApiClient` pointed at it.
pub struct TestBackend {
    pub server: MockServer,
    pub api_client: ApiClient,
}

pub async fn spawn_backend() -> TestBackend {
    Lazy::force(&TRACING);
    let server = MockServer::start().await;
    let api_client = ApiClient::new(server.uri());
    TestBackend { server, api_client }
}

/// Navigator that records every pushed location.
#[derive(Default)]
pub struct RecordedNavigation(Mutex<Vec<String>>);

impl RecordedNavigation {
    pub fn visited(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for RecordedNavigation {
    fn push(&self, location: &str) {
        self.0.lock().unwrap().push(location.to_owned());
    }
}
