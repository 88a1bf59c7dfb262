use fundhub_shared::errors::AppResult;

use crate::models::FundingOpportunity;
use crate::repositories::FundRepository;

/// List funding opportunities, with the viewer's application status when known.
pub async fn list_opportunities(
    repo: &dyn FundRepository,
    user_id: Option<&str>,
) -> AppResult<Vec<FundingOpportunity>> {
    let opportunities = match user_id {
        Some(user_id) => repo.list_funds_for_applicant(user_id).await?,
        None => repo.list_funds().await?,
    };

    tracing::debug!(count = opportunities.len(), has_viewer = user_id.is_some(), "listed funding opportunities");
    Ok(opportunities)
}
