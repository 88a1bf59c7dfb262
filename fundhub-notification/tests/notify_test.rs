mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;

use common::{post_json, send, TestApp};
use fundhub_notification::models::NotificationKind;
use fundhub_shared::clients::db::StoreError;

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn creates_approved_application_notification() {
    let mut app = TestApp::new();
    app.notifications
        .expect_insert()
        .withf(|n| {
            n.fund_id == 1
                && n.kind
                    == NotificationKind::ApprovedApplication {
                        target_user_id: "123".into(),
                    }
        })
        .times(1)
        .returning(|_| Ok(1));

    let (status, body) = send(
        app.router(),
        post_json(
            "/notify",
            &json!({ "target_user_id": "123", "type": "approved application", "fund_id": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "message": "Notification created successfully", "notificationId": 1 })
    );
}

#[tokio::test]
async fn creates_new_applicant_notification_without_target() {
    let mut app = TestApp::new();
    app.notifications
        .expect_insert()
        .withf(|n| n.kind == NotificationKind::NewApplicant { target_user_id: None })
        .times(1)
        .returning(|_| Ok(1));

    let (status, body) = send(
        app.router(),
        post_json("/notify", &json!({ "type": "new applicant", "fund_id": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "message": "Notification created successfully", "notificationId": 1 })
    );
}

#[tokio::test]
async fn returns_store_generated_id() {
    let mut app = TestApp::new();
    app.notifications
        .expect_insert()
        .times(1)
        .returning(|_| Ok(9_876));

    let (status, body) = send(
        app.router(),
        post_json(
            "/notify",
            &json!({ "target_user_id": 55, "type": "rejected application", "fund_id": "3" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["notificationId"], 9_876);
}

// =============================================================================
// Validation
// =============================================================================

async fn assert_rejected(body: serde_json::Value) {
    let mut app = TestApp::new();
    app.notifications.expect_insert().never();

    let (status, response) = send(app.router(), post_json("/notify", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
    assert_eq!(response, json!({ "error": "Missing required parameters" }));
}

#[tokio::test]
async fn rejects_missing_fund_id_and_target() {
    assert_rejected(json!({ "type": "approved application" })).await;
}

#[tokio::test]
async fn rejects_approved_application_without_target() {
    assert_rejected(json!({ "type": "approved application", "fund_id": 1 })).await;
}

#[tokio::test]
async fn rejects_rejected_application_without_target() {
    assert_rejected(json!({ "type": "rejected application", "fund_id": 1 })).await;
}

#[tokio::test]
async fn rejects_target_wider_than_column() {
    let target = "9".repeat(65);
    assert_rejected(json!({ "target_user_id": target, "type": "approved application", "fund_id": 1 }))
        .await;
}

#[tokio::test]
async fn rejects_missing_type() {
    assert_rejected(json!({ "target_user_id": "123", "fund_id": 1 })).await;
}

#[tokio::test]
async fn rejects_unknown_type() {
    assert_rejected(json!({ "type": "fund closed", "fund_id": 1 })).await;
}

#[tokio::test]
async fn rejects_empty_object() {
    assert_rejected(json!({})).await;
}

#[tokio::test]
async fn rejects_non_json_body() {
    let mut app = TestApp::new();
    app.notifications.expect_insert().never();

    let request = Request::builder()
        .method("POST")
        .uri("/notify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("type=new+applicant&fund_id=1"))
        .unwrap();
    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required parameters" }));
}

#[tokio::test]
async fn rejects_missing_content_type() {
    let mut app = TestApp::new();
    app.notifications.expect_insert().never();

    let request = Request::builder()
        .method("POST")
        .uri("/notify")
        .body(Body::from(r#"{"type":"new applicant","fund_id":1}"#))
        .unwrap();
    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameters");
}

// =============================================================================
// Store failure
// =============================================================================

#[tokio::test]
async fn store_error_returns_generic_500() {
    let mut app = TestApp::new();
    app.notifications
        .expect_insert()
        .times(1)
        .returning(|_| Err(StoreError::query("Database error")));

    let (status, body) = send(
        app.router(),
        post_json(
            "/notify",
            &json!({ "target_user_id": "123", "type": "approved application", "fund_id": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
    assert!(body.get("notificationId").is_none());
}

#[tokio::test]
async fn connection_error_returns_generic_500() {
    let mut app = TestApp::new();
    app.notifications
        .expect_insert()
        .times(1)
        .returning(|_| Err(StoreError::connection("timed out waiting for connection")));

    let (status, body) = send(
        app.router(),
        post_json("/notify", &json!({ "type": "new applicant", "fund_id": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}
