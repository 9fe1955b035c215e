//! Integration tests for the shared list query contract.

use axum::http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

async fn seed_categories(app: &TestApp, tenant_id: Uuid, count: usize) {
    let repo =
        shopadmin_database::repositories::CategoryRepository::new(app.db_pool.clone());
    for i in 0..count {
        repo.create(&shopadmin_entity::category::CreateCategory {
            tenant_id,
            name: format!("Category {i:02}"),
            description: None,
            image_url: None,
            display_order: i as i32,
            created_by: None,
            user_ip: None,
        })
        .await
        .expect("Failed to seed category");
    }
}

#[tokio::test]
async fn test_default_page_size_is_ten() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("list-defaults").await;
    app.create_test_user("listadmin1", "correct-horse-battery", "admin", None)
        .await;
    seed_categories(&app, tenant.id, 15).await;
    let token = app.login("listadmin1", "correct-horse-battery").await;

    let response = app
        .request("GET", "/api/categories", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 10);
    assert_eq!(response.body["meta"]["page"], 1);
    assert_eq!(response.body["meta"]["page_size"], 10);
    assert_eq!(response.body["meta"]["total_items"], 15);
    assert_eq!(response.body["meta"]["total_pages"], 2);
}

#[tokio::test]
async fn test_second_page_holds_remainder() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("list-remainder").await;
    app.create_test_user("listadmin2", "correct-horse-battery", "admin", None)
        .await;
    seed_categories(&app, tenant.id, 15).await;
    let token = app.login("listadmin2", "correct-horse-battery").await;

    let response = app
        .request("GET", "/api/categories?page=2", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 5);
    assert_eq!(response.body["meta"]["page"], 2);
}

#[tokio::test]
async fn test_search_filters_by_substring() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("list-search").await;
    app.create_test_user("listadmin3", "correct-horse-battery", "admin", None)
        .await;
    seed_categories(&app, tenant.id, 12).await;
    let token = app.login("listadmin3", "correct-horse-battery").await;

    let response = app
        .request(
            "GET",
            "/api/categories?search=Category%2001",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total_items"], 1);
    assert_eq!(response.body["data"][0]["name"], "Category 01");
}

#[tokio::test]
async fn test_unknown_sort_column_falls_back() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("list-sort").await;
    app.create_test_user("listadmin4", "correct-horse-battery", "admin", None)
        .await;
    seed_categories(&app, tenant.id, 3).await;
    let token = app.login("listadmin4", "correct-horse-battery").await;

    // A sort column outside the allow list must not fail or leak into SQL.
    let response = app
        .request(
            "GET",
            "/api/categories?sort_by=password_hash%3B%20DROP%20TABLE%20users",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["total_items"], 3);
}

#[tokio::test]
async fn test_sort_ascending_by_name() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("list-asc").await;
    app.create_test_user("listadmin5", "correct-horse-battery", "admin", None)
        .await;
    seed_categories(&app, tenant.id, 3).await;
    let token = app.login("listadmin5", "correct-horse-battery").await;

    let response = app
        .request(
            "GET",
            "/api/categories?sort_by=name&sort_order=asc",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Category 00", "Category 01", "Category 02"]);
}

#[tokio::test]
async fn test_malformed_page_param_gets_error_envelope() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_test_user("listadmin7", "correct-horse-battery", "admin", None)
        .await;
    let token = app.login("listadmin7", "correct-horse-battery").await;

    let response = app
        .request("GET", "/api/categories?page=abc", None, Some(&token))
        .await;

    // Bad query strings answer in the same envelope as body validation.
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["success"], false);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid list parameters")
    );
}

#[tokio::test]
async fn test_page_size_is_capped() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("list-cap").await;
    app.create_test_user("listadmin6", "correct-horse-battery", "admin", None)
        .await;
    seed_categories(&app, tenant.id, 2).await;
    let token = app.login("listadmin6", "correct-horse-battery").await;

    let response = app
        .request(
            "GET",
            "/api/categories?page_size=100000",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["meta"]["page_size"], 100);
}
