//! Integration tests for organizations and health.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_create_and_list_organizations() {
    let app = TestApp::new().await;
    app.create_org("Globex").await;
    let acme = app.create_org("Acme").await;

    let response = app.request("GET", "/api/organizations", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<_> = response.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|o| o["name"].as_str().expect("name").to_string())
        .collect();
    assert_eq!(names, vec!["Acme", "Globex"]);

    let one = app
        .request("GET", &format!("/api/organizations/{acme}"), None)
        .await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["data"]["name"], "Acme");
}

#[tokio::test]
async fn test_blank_organization_name_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/organizations", Some(json!({ "name": "" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_organization_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/organizations/00000000-0000-0000-0000-000000000001/tree",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
