//! Integration tests for image uploads.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use crate::helpers::TestApp;

/// Minimal valid PNG header followed by filler bytes.
fn png_bytes() -> Vec<u8> {
    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&[0u8; 64]);
    data
}

fn multipart_body(field: &str, filename: &str, content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "test-boundary-7f3a";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}

async fn upload(app: &TestApp, token: &str, field: &str, content: &[u8]) -> (StatusCode, serde_json::Value) {
    let (content_type, body) = multipart_body(field, "upload.bin", content);
    let request = Request::builder()
        .method("POST")
        .uri("/api/uploads/images")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_upload_png_succeeds() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("upload-ok").await;
    app.create_test_user(
        "uploader",
        "correct-horse-battery",
        "manager",
        Some(tenant.id),
    )
    .await;
    let token = app.login("uploader", "correct-horse-battery").await;

    let (status, body) = upload(&app, &token, "file", &png_bytes()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["content_type"], "image/png");
    assert!(
        body["data"]["url"]
            .as_str()
            .unwrap()
            .ends_with(".png")
    );
}

#[tokio::test]
async fn test_upload_rejects_non_image_payload() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("upload-bad").await;
    app.create_test_user(
        "uploader2",
        "correct-horse-battery",
        "manager",
        Some(tenant.id),
    )
    .await;
    let token = app.login("uploader2", "correct-horse-battery").await;

    // Content sniffing, not the filename, decides whether this is an image.
    let (status, body) = upload(&app, &token, "file", b"#!/bin/sh\nrm -rf /\n").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_upload_requires_file_field() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("upload-field").await;
    app.create_test_user(
        "uploader3",
        "correct-horse-battery",
        "manager",
        Some(tenant.id),
    )
    .await;
    let token = app.login("uploader3", "correct-horse-battery").await;

    let (status, _) = upload(&app, &token, "attachment", &png_bytes()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_upload_forbidden_for_staff() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let tenant = app.create_test_tenant("upload-staff").await;
    app.create_test_user(
        "staffupload",
        "correct-horse-battery",
        "staff",
        Some(tenant.id),
    )
    .await;
    let token = app.login("staffupload", "correct-horse-battery").await;

    let (status, _) = upload(&app, &token, "file", &png_bytes()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
