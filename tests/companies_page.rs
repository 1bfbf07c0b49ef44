//! Route-level tests for the companies page.
//!
//! Drives the real router against a mocked Qard API and checks the
//! rendered HTML.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use qardboard::config::QardConfig;
use qardboard::services::QardClient;
use qardboard::{api, AppState};

fn test_server(qard_api: &MockServer) -> TestServer {
    let client = QardClient::new(&QardConfig {
        base_url: qard_api.uri(),
        api_key: "test-key".to_string(),
    });
    let state = AppState::with_client(Arc::new(client));
    let app = api::routes().with_state(state);
    TestServer::new(app).expect("test server")
}

#[tokio::test]
async fn test_companies_page_lists_directory() {
    let qard_api = MockServer::start().await;
    let user_id = Uuid::new_v4().to_string();

    Mock::given(method("POST"))
        .and(path_regex(r"^/api/v6/users/legal$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": user_id,
            "redirect_url": "https://dashboard.qard.example/onboard",
        })))
        .mount(&qard_api)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/v6/users/.+/company-profile$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "creation_date": "2018-04-12",
            "legal": { "status": "active" },
        })))
        .mount(&qard_api)
        .await;

    let server = test_server(&qard_api);
    let response = server.get("/companies").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<table>"));
    for name in ["QARD.", "ARIA", "MANSA GROUP", "ALGOAN", "YELLOAN", "AVANSEO"] {
        assert!(html.contains(name), "page should list {}", name);
    }
    assert!(html.contains(&user_id));
    assert!(!html.contains("class=\"warning\""));
}

/// The page still renders 200 when the whole upstream API is down.
#[tokio::test]
async fn test_companies_page_renders_warnings_when_api_is_down() {
    let qard_api = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/api/v6/users/legal$"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&qard_api)
        .await;

    let server = test_server(&qard_api);
    let response = server.get("/companies").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(html.matches("class=\"warning\"").count(), 6);
    assert!(html.contains("No companies to display."));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let qard_api = MockServer::start().await;
    let server = test_server(&qard_api);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
