use crate::helpers::{spawn_backend, RecordedNavigation};
use account_pages::forms::VerificationForm;
use account_pages::pages;
use claims::{assert_none, assert_some};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_successful_verification_navigates_straight_to_signin() {
    // Arrange
    let backend = spawn_backend().await;
    Mock::given(path("/api/verify"))
        .and(method("POST"))
        .and(body_json(serde_json::json!({
            "email": "jo@example.com",
            "code": "123456"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend.server)
        .await;
    let mut form = VerificationForm::new(backend.api_client, "jo@example.com".into());

    // Act
    let redirect = form.submit("123456").await;

    // Assert
    let redirect = assert_some!(redirect);
    assert_eq!(redirect.location(), "/signin");
    assert_eq!(redirect.delay(), Duration::ZERO);
    // No intermediate confirmation message
    assert!(!form.state().is_success());
    // The loading state is deliberately left set; navigation replaces the view
    assert!(form.submit_disabled());

    let navigation = RecordedNavigation::default();
    redirect.follow(&navigation).await;
    assert_eq!(navigation.visited(), vec!["/signin".to_string()]);
}

#[tokio::test]
async fn a_rejected_verification_displays_the_message_and_reenables_submit() {
    // Arrange
    let backend = spawn_backend().await;
    Mock::given(path("/api/verify"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "message": "Invalid code" })),
        )
        .mount(&backend.server)
        .await;
    let mut form = VerificationForm::new(backend.api_client, "jo@example.com".into());

    // Act
    let redirect = form.submit("000000").await;

    // Assert
    assert_none!(redirect);
    assert_eq!(form.state().error_message(), Some("Invalid code"));
    assert!(!form.submit_disabled());
}

#[tokio::test]
async fn the_request_carries_the_email_from_the_query_string() {
    // Arrange
    let backend = spawn_backend().await;
    Mock::given(path("/api/verify"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&backend.server)
        .await;
    let location = Url::parse("https://example.com/verify?email=jo%40example.com").unwrap();
    let mut form = pages::verify::mount(backend.api_client, Some(&location))
        .ready()
        .unwrap();

    // Act
    form.submit("123456").await;

    // Assert
    let request = &backend.server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["email"].as_str().unwrap(), "jo@example.com");
    assert_eq!(body["code"].as_str().unwrap(), "123456");
}
