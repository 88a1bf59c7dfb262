use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use fundhub_shared::clients::db::{DbPool, StoreError};

use crate::models::{Fund, FundingOpportunity};
use crate::schema::{applications, funds};

#[async_trait]
pub trait FundRepository: Send + Sync {
    /// Every fund, soonest deadline first.
    async fn list_funds(&self) -> Result<Vec<FundingOpportunity>, StoreError>;

    /// Every fund, annotated with the given user's application status.
    async fn list_funds_for_applicant(
        &self,
        user_id: &str,
    ) -> Result<Vec<FundingOpportunity>, StoreError>;
}

#[derive(Clone)]
pub struct DieselFundRepository {
    pool: DbPool,
}

impl DieselFundRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FundRepository for DieselFundRepository {
    async fn list_funds(&self) -> Result<Vec<FundingOpportunity>, StoreError> {
        let mut conn = self.pool.get().await?;

        let rows: Vec<Fund> = funds::table
            .order((funds::deadline.asc(), funds::id.asc()))
            .select(Fund::as_select())
            .load(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(FundingOpportunity::without_application)
            .collect())
    }

    async fn list_funds_for_applicant(
        &self,
        user_id: &str,
    ) -> Result<Vec<FundingOpportunity>, StoreError> {
        let mut conn = self.pool.get().await?;

        let rows: Vec<(Fund, Option<String>)> = funds::table
            .left_join(
                applications::table.on(applications::fund_id
                    .eq(funds::id)
                    .and(applications::user_id.eq(user_id))),
            )
            .order((funds::deadline.asc(), funds::id.asc()))
            .select((Fund::as_select(), applications::status.nullable()))
            .load(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(fund, status)| FundingOpportunity::with_application(fund, status.as_deref()))
            .collect())
    }
}
