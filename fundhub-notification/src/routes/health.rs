use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use fundhub_shared::types::api::{HealthCheck, HealthResponse, HealthStatus};

use crate::AppState;

pub const SERVICE_NAME: &str = "fundhub-notification";

pub async fn root() -> &'static str {
    concat!("fundhub-notification ", env!("CARGO_PKG_VERSION"))
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.store.ping().await {
        Ok(()) => HealthCheck::healthy("database"),
        Err(e) => {
            tracing::warn!(error = %e, "database health check failed");
            HealthCheck::unhealthy("database", "unreachable")
        }
    };

    let response = HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION"))
        .with_checks(vec![database]);
    let status = match response.status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
    };

    (status, Json(response))
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics_handle.render()
}
