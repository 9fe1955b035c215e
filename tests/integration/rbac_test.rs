//! Integration tests for role checks and tenant scoping.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_staff_cannot_create_user() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("rbac-staff").await;
    app.create_test_user("staff1", "correct-horse-battery", "staff", Some(tenant.id))
        .await;
    let token = app.login("staff1", "correct-horse-battery").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "intruder",
                "password": "tricky-Otter#91-lamp",
                "role": "staff",
                "tenant_id": tenant.id,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_cannot_create_category() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("rbac-staff-cat").await;
    app.create_test_user("staff2", "correct-horse-battery", "staff", Some(tenant.id))
        .await;
    let token = app.login("staff2", "correct-horse-battery").await;

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "Forbidden" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_manager_is_pinned_to_own_tenant() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant_a = app.create_test_tenant("rbac-tenant-a").await;
    let tenant_b = app.create_test_tenant("rbac-tenant-b").await;
    app.create_test_user(
        "manager_a",
        "correct-horse-battery",
        "manager",
        Some(tenant_a.id),
    )
    .await;
    let token = app.login("manager_a", "correct-horse-battery").await;

    // Asking for another tenant's scope is rejected outright.
    let response = app
        .request(
            "GET",
            &format!("/api/categories?tenant_id={}", tenant_b.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cross_tenant_record_reads_as_not_found() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant_a = app.create_test_tenant("rbac-hide-a").await;
    let tenant_b = app.create_test_tenant("rbac-hide-b").await;
    app.create_test_user(
        "manager_hide",
        "correct-horse-battery",
        "manager",
        Some(tenant_a.id),
    )
    .await;

    let repo = shopadmin_database::repositories::CategoryRepository::new(app.db_pool.clone());
    let other = repo
        .create(&shopadmin_entity::category::CreateCategory {
            tenant_id: tenant_b.id,
            name: "Hidden".to_string(),
            description: None,
            image_url: None,
            display_order: 0,
            created_by: None,
            user_ip: None,
        })
        .await
        .unwrap();

    let token = app.login("manager_hide", "correct-horse-battery").await;
    let response = app
        .request(
            "GET",
            &format!("/api/categories/{}", other.id),
            None,
            Some(&token),
        )
        .await;

    // Existence of other tenants' records is not revealed.
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_manager_creates_category_in_own_tenant() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("rbac-own").await;
    app.create_test_user(
        "manager_own",
        "correct-horse-battery",
        "manager",
        Some(tenant.id),
    )
    .await;
    let token = app.login("manager_own", "correct-horse-battery").await;

    // No tenant_id in the body, the service pins it to the caller's tenant.
    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "Mugs" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["tenant_id"], tenant.id.to_string());
}

#[tokio::test]
async fn test_manager_faq_list_includes_global_faqs() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("rbac-faq-global").await;
    app.create_test_user(
        "manager_faq",
        "correct-horse-battery",
        "manager",
        Some(tenant.id),
    )
    .await;

    let repo = shopadmin_database::repositories::FaqRepository::new(app.db_pool.clone());
    for (tenant_id, question) in [
        (None, "How do refunds work?"),
        (Some(tenant.id), "Where is my order?"),
    ] {
        repo.create(&shopadmin_entity::faq::CreateFaq {
            tenant_id,
            question: question.to_string(),
            answer: "See the help center.".to_string(),
            display_order: 0,
            created_by: None,
            user_ip: None,
        })
        .await
        .unwrap();
    }

    let token = app.login("manager_faq", "correct-horse-battery").await;
    let response = app.request("GET", "/api/faqs", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let questions: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|faq| faq["question"].as_str())
        .collect();
    // Platform-wide FAQs (no tenant) show up next to the tenant's own.
    assert!(questions.contains(&"How do refunds work?"));
    assert!(questions.contains(&"Where is my order?"));
}

#[tokio::test]
async fn test_create_user_with_short_username_is_rejected() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.create_test_user("valadmin", "correct-horse-battery", "admin", None)
        .await;
    let token = app.login("valadmin", "correct-horse-battery").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "ab",
                "password": "tricky-Otter#91-lamp",
                "role": "admin",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["success"], false);
    assert!(response.body["errors"].is_array());
}

#[tokio::test]
async fn test_admin_creates_manager_with_tenant() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("rbac-admin-create").await;
    app.create_test_user("headadmin", "correct-horse-battery", "admin", None)
        .await;
    let token = app.login("headadmin", "correct-horse-battery").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": "newmanager",
                "password": "tricky-Otter#91-lamp",
                "role": "manager",
                "tenant_id": tenant.id,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["role"], "manager");
    // The hash never leaves the service layer.
    assert!(response.body["data"].get("password_hash").is_none());
}
