//! Integration tests for authentication flow.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_test_user("admin1", "correct-horse-battery", "admin", None)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "admin1",
                "password": "correct-horse-battery",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert!(response.body["data"]["refresh_token"].is_string());
    assert_eq!(response.body["data"]["user"]["username"], "admin1");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_test_user("admin2", "correct-horse-battery", "admin", None)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "admin2",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "whatever-password",
            })),
            None,
        )
        .await;

    // Same status and message as a wrong password, no user enumeration.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_returns_new_access_token() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_test_user("admin3", "correct-horse-battery", "admin", None)
        .await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "admin3",
                "password": "correct-horse-battery",
            })),
            None,
        )
        .await;
    let refresh_token = login.body["data"]["refresh_token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_test_user("admin4", "correct-horse-battery", "admin", None)
        .await;
    let access_token = app.login("admin4", "correct-horse-battery").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": access_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_authenticated() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_test_user("meuser", "correct-horse-battery", "admin", None)
        .await;
    let token = app.login("meuser", "correct-horse-battery").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "meuser");
}

#[tokio::test]
async fn test_me_without_token() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
