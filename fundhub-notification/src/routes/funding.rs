use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use fundhub_shared::errors::AppResult;

use crate::models::FundingOpportunity;
use crate::services::funding_service;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FundingQuery {
    pub user_id: Option<String>,
}

/// GET /funding-opportunities
/// List funds; with `user_id`, include that user's application status per fund.
pub async fn list_funding_opportunities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FundingQuery>,
) -> AppResult<Json<Vec<FundingOpportunity>>> {
    let user_id = query.user_id.as_deref().map(str::trim).filter(|u| !u.is_empty());
    let opportunities = funding_service::list_opportunities(state.funds.as_ref(), user_id).await?;

    Ok(Json(opportunities))
}
