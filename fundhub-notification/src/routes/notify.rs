use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use fundhub_shared::errors::AppResult;

use crate::models::NotificationCreated;
use crate::services::notification_service;
use crate::validation::{CreateNotificationRequest, ValidationError};
use crate::AppState;

/// POST /notify
/// Validate the body, insert one notification, and return its id.
pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateNotificationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<NotificationCreated>)> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable notification body");
        ValidationError::MalformedBody
    })?;

    let notification = request.validate()?;
    let id = notification_service::create_notification(state.notifications.as_ref(), &notification)
        .await?;

    Ok((StatusCode::CREATED, Json(NotificationCreated::new(id))))
}
