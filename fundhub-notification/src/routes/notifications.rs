use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use fundhub_shared::errors::{AppError, AppResult, ErrorCode};
use fundhub_shared::types::pagination::{Paginated, PaginationParams};

use crate::models::Notification;
use crate::services::notification_service;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NotificationFilter {
    pub target_user_id: Option<String>,
}

/// GET /notifications?target_user_id=..&page=..&per_page=..
/// List notifications addressed to a user, newest first.
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<NotificationFilter>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<Paginated<Notification>>> {
    let target_user_id = filter
        .target_user_id
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(AppError::missing_parameters)?;

    let Query(params) = params
        .map_err(|e| AppError::new(ErrorCode::InvalidPagination, e.body_text()))?;

    let page = notification_service::list_notifications(
        state.notifications.as_ref(),
        target_user_id,
        &params,
    )
    .await?;

    Ok(Json(page))
}
