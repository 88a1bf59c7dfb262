#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use mockall::mock;
use tower::ServiceExt;

use fundhub_notification::config::AppConfig;
use fundhub_notification::models::{Fund, FundingOpportunity, NewNotification, Notification};
use fundhub_notification::repositories::{FundRepository, NotificationRepository, StoreProbe};
use fundhub_notification::startup::build_router;
use fundhub_notification::AppState;
use fundhub_shared::clients::db::StoreError;
use fundhub_shared::middleware::detached_metrics_handle;

mock! {
    pub Notifications {}

    #[async_trait]
    impl NotificationRepository for Notifications {
        async fn insert(&self, notification: &NewNotification) -> Result<u64, StoreError>;

        async fn list_for_target(
            &self,
            target_user_id: &str,
            limit: u64,
            offset: u64,
        ) -> Result<(Vec<Notification>, u64), StoreError>;
    }
}

mock! {
    pub Funds {}

    #[async_trait]
    impl FundRepository for Funds {
        async fn list_funds(&self) -> Result<Vec<FundingOpportunity>, StoreError>;

        async fn list_funds_for_applicant(
            &self,
            user_id: &str,
        ) -> Result<Vec<FundingOpportunity>, StoreError>;
    }
}

mock! {
    pub Store {}

    #[async_trait]
    impl StoreProbe for Store {
        async fn ping(&self) -> Result<(), StoreError>;
    }
}

pub struct TestApp {
    pub notifications: MockNotifications,
    pub funds: MockFunds,
    pub store: MockStore,
}

impl TestApp {
    /// Mocks with no expectations: any store call fails the test.
    pub fn new() -> Self {
        Self {
            notifications: MockNotifications::new(),
            funds: MockFunds::new(),
            store: MockStore::new(),
        }
    }

    pub fn router(self) -> Router {
        let state = AppState {
            config: AppConfig::default(),
            notifications: Arc::new(self.notifications),
            funds: Arc::new(self.funds),
            store: Arc::new(self.store),
            metrics_handle: detached_metrics_handle(),
        };
        build_router(Arc::new(state))
    }
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send_raw(app, request).await;
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("response body is not JSON ({e}): {body}"));
    (status, json)
}

pub fn fund(id: u64, title: &str, deadline: (i32, u32, u32)) -> Fund {
    Fund {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        amount: 1000.0 * id as f64,
        deadline: NaiveDate::from_ymd_opt(deadline.0, deadline.1, deadline.2).unwrap(),
        image: None,
    }
}

pub fn notification(id: u64, target_user_id: &str, notification_type: &str) -> Notification {
    Notification {
        id,
        target_user_id: Some(target_user_id.to_string()),
        notification_type: notification_type.to_string(),
        fund_id: 1,
        created_at: NaiveDate::from_ymd_opt(2026, 10, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    }
}
