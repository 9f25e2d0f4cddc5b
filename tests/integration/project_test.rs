//! Integration tests for project filing.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_project_follows_folder_through_move() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let docs = app.create_folder(&org, "Docs", None).await["id"]
        .as_str()
        .expect("id")
        .to_string();
    let archive = app.create_folder(&org, "Archive", None).await["id"]
        .as_str()
        .expect("id")
        .to_string();

    let created = app
        .request(
            "POST",
            &format!("/api/organizations/{org}/projects"),
            Some(json!({ "name": "Roadmap", "folder_id": docs })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let project = created.id();

    let moved = app
        .request(
            "PUT",
            &format!("/api/folders/{docs}/move"),
            Some(json!({ "new_parent_id": archive })),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);

    let listed = app
        .request(
            "GET",
            &format!("/api/organizations/{org}/projects?folder_id={docs}"),
            None,
        )
        .await;
    assert_eq!(listed.ids(), vec![project]);
}

#[tokio::test]
async fn test_assign_and_unfile_project() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let docs = app.create_folder(&org, "Docs", None).await["id"]
        .as_str()
        .expect("id")
        .to_string();

    let project = app
        .request(
            "POST",
            &format!("/api/organizations/{org}/projects"),
            Some(json!({ "name": "Loose" })),
        )
        .await
        .id();

    let unfiled = app
        .request("GET", &format!("/api/organizations/{org}/projects"), None)
        .await;
    assert_eq!(unfiled.ids(), vec![project.clone()]);

    let filed = app
        .request(
            "PUT",
            &format!("/api/projects/{project}/folder"),
            Some(json!({ "folder_id": docs })),
        )
        .await;
    assert_eq!(filed.status, StatusCode::OK);
    assert_eq!(filed.body["data"]["folder_id"], docs);

    let cleared = app
        .request(
            "PUT",
            &format!("/api/projects/{project}/folder"),
            Some(json!({ "folder_id": null })),
        )
        .await;
    assert!(cleared.body["data"]["folder_id"].is_null());
}

#[tokio::test]
async fn test_project_cannot_use_other_organization_folder() {
    let app = TestApp::new().await;
    let acme = app.create_org("Acme").await;
    let globex = app.create_org("Globex").await;
    let foreign = app.create_folder(&globex, "Theirs", None).await["id"]
        .as_str()
        .expect("id")
        .to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/organizations/{acme}/projects"),
            Some(json!({ "name": "Sneaky", "folder_id": foreign })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_folder_unfiles_its_projects() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let docs = app.create_folder(&org, "Docs", None).await["id"]
        .as_str()
        .expect("id")
        .to_string();
    let project = app
        .request(
            "POST",
            &format!("/api/organizations/{org}/projects"),
            Some(json!({ "name": "Roadmap", "folder_id": docs })),
        )
        .await
        .id();

    let deleted = app
        .request("DELETE", &format!("/api/folders/{docs}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let fetched = app
        .request("GET", &format!("/api/projects/{project}"), None)
        .await;
    assert!(fetched.body["data"]["folder_id"].is_null());
}
