//! Integration tests for folder tree endpoints.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn id(value: &serde_json::Value) -> String {
    value["id"].as_str().expect("folder id").to_string()
}

#[tokio::test]
async fn test_create_root_and_child_paths() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;

    let docs = app.create_folder(&org, "Docs", None).await;
    let docs_id = id(&docs);
    assert_eq!(docs["path"], format!("/{docs_id}"));
    assert_eq!(docs["depth"], 1);
    assert!(docs["parent_id"].is_null());

    let specs = app.create_folder(&org, "Specs", Some(&docs_id)).await;
    let specs_id = id(&specs);
    assert_eq!(specs["path"], format!("/{docs_id}/{specs_id}"));
    assert_eq!(specs["depth"], 2);
}

#[tokio::test]
async fn test_fifth_level_is_rejected() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;

    let mut parent: Option<String> = None;
    for name in ["L1", "L2", "L3", "L4"] {
        let folder = app.create_folder(&org, name, parent.as_deref()).await;
        parent = Some(id(&folder));
    }

    let response = app
        .request(
            "POST",
            &format!("/api/organizations/{org}/folders"),
            Some(json!({ "name": "L5", "parent_id": parent })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("maximum of 4")
    );
}

#[tokio::test]
async fn test_missing_parent_is_not_found() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;

    let response = app
        .request(
            "POST",
            &format!("/api/organizations/{org}/folders"),
            Some(json!({
                "name": "Orphan",
                "parent_id": "00000000-0000-0000-0000-000000000009"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_roots_and_children() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let docs = id(&app.create_folder(&org, "Docs", None).await);
    let specs = id(&app.create_folder(&org, "Specs", Some(&docs)).await);
    let archive = id(&app.create_folder(&org, "Archive", None).await);

    let roots = app
        .request("GET", &format!("/api/organizations/{org}/folders"), None)
        .await;
    assert_eq!(roots.status, StatusCode::OK);
    assert_eq!(roots.ids(), vec![archive, docs.clone()]);

    let children = app
        .request(
            "GET",
            &format!("/api/organizations/{org}/folders?parent_id={docs}"),
            None,
        )
        .await;
    assert_eq!(children.ids(), vec![specs]);
}

#[tokio::test]
async fn test_move_to_root_rewrites_subtree() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let f1 = id(&app.create_folder(&org, "Docs", None).await);
    let f2 = id(&app.create_folder(&org, "Specs", Some(&f1)).await);
    let f3 = id(&app.create_folder(&org, "Drafts", Some(&f2)).await);
    let f4 = id(&app.create_folder(&org, "Old", Some(&f3)).await);

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{f2}/move"),
            Some(json!({ "new_parent_id": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["path"], format!("/{f2}"));
    assert_eq!(app.path_of(&f2).await, format!("/{f2}"));
    assert_eq!(app.path_of(&f3).await, format!("/{f2}/{f3}"));
    assert_eq!(app.path_of(&f4).await, format!("/{f2}/{f3}/{f4}"));
    assert_eq!(app.path_of(&f1).await, format!("/{f1}"));
}

#[tokio::test]
async fn test_move_into_descendant_is_rejected() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let f1 = id(&app.create_folder(&org, "Docs", None).await);
    let f2 = id(&app.create_folder(&org, "Specs", Some(&f1)).await);
    let f3 = id(&app.create_folder(&org, "Drafts", Some(&f2)).await);

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{f2}/move"),
            Some(json!({ "new_parent_id": f3 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.path_of(&f2).await, format!("/{f1}/{f2}"));
    assert_eq!(app.path_of(&f3).await, format!("/{f1}/{f2}/{f3}"));
}

#[tokio::test]
async fn test_move_without_new_parent_field_is_rejected() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let target = id(&app.create_folder(&org, "Target", None).await);
    let a = id(&app.create_folder(&org, "A", None).await);
    let b = id(&app.create_folder(&org, "B", Some(&a)).await);

    for body in [json!({ "parent_id": target }), json!({})] {
        let response = app
            .request("PUT", &format!("/api/folders/{b}/move"), Some(body))
            .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    assert_eq!(app.path_of(&b).await, format!("/{a}/{b}"));
}

#[tokio::test]
async fn test_descendants_and_ancestors() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let a = id(&app.create_folder(&org, "A", None).await);
    let b = id(&app.create_folder(&org, "B", Some(&a)).await);
    let c = id(&app.create_folder(&org, "C", Some(&b)).await);

    let descendants = app
        .request("GET", &format!("/api/folders/{a}/descendants"), None)
        .await;
    assert_eq!(descendants.status, StatusCode::OK);
    assert_eq!(descendants.ids(), vec![b.clone(), c.clone()]);

    let ancestors = app
        .request("GET", &format!("/api/folders/{c}/ancestors"), None)
        .await;
    assert_eq!(ancestors.ids(), vec![a.clone(), b.clone()]);

    let root_ancestors = app
        .request("GET", &format!("/api/folders/{a}/ancestors"), None)
        .await;
    assert_eq!(root_ancestors.status, StatusCode::OK);
    assert!(root_ancestors.ids().is_empty());

    let breadcrumbs = app
        .request("GET", &format!("/api/folders/{c}/breadcrumbs"), None)
        .await;
    assert_eq!(breadcrumbs.ids(), vec![a, b, c]);
}

#[tokio::test]
async fn test_rename_keeps_path() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let docs = id(&app.create_folder(&org, "Docs", None).await);

    let response = app
        .request(
            "PATCH",
            &format!("/api/folders/{docs}"),
            Some(json!({ "name": "Documents" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Documents");
    assert_eq!(response.body["data"]["path"], format!("/{docs}"));
}

#[tokio::test]
async fn test_delete_non_empty_folder_conflicts() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let docs = id(&app.create_folder(&org, "Docs", None).await);
    let specs = id(&app.create_folder(&org, "Specs", Some(&docs)).await);

    let conflict = app
        .request("DELETE", &format!("/api/folders/{docs}"), None)
        .await;
    assert_eq!(conflict.status, StatusCode::CONFLICT);

    let deleted = app
        .request("DELETE", &format!("/api/folders/{specs}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/folders/{specs}"), None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forest_and_subtree() {
    let app = TestApp::new().await;
    let org = app.create_org("Acme").await;
    let docs = id(&app.create_folder(&org, "Docs", None).await);
    app.create_folder(&org, "Specs", Some(&docs)).await;
    app.create_folder(&org, "Archive", None).await;

    let forest = app
        .request("GET", &format!("/api/organizations/{org}/tree"), None)
        .await;
    assert_eq!(forest.status, StatusCode::OK);
    assert_eq!(forest.body["data"]["total_folders"], 3);
    assert_eq!(forest.body["data"]["roots"][0]["name"], "Archive");
    assert_eq!(forest.body["data"]["roots"][1]["children"][0]["name"], "Specs");

    let subtree = app
        .request("GET", &format!("/api/folders/{docs}/tree"), None)
        .await;
    assert_eq!(subtree.body["data"]["name"], "Docs");
    assert_eq!(
        subtree.body["data"]["children"]
            .as_array()
            .expect("children")
            .len(),
        1
    );
}

#[tokio::test]
async fn test_malformed_folder_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/folders/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
