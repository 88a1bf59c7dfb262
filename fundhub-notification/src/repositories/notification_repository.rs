use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Unsigned};
use diesel_async::RunQueryDsl;

use fundhub_shared::clients::db::{DbPool, StoreError};

use crate::models::{NewNotification, Notification};
use crate::schema::notifications;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert one row and return the id the store generated for it.
    async fn insert(&self, notification: &NewNotification) -> Result<u64, StoreError>;

    /// One page of a user's notifications, newest first, plus the total count.
    async fn list_for_target(
        &self,
        target_user_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Notification>, u64), StoreError>;
}

#[derive(Clone)]
pub struct DieselNotificationRepository {
    pool: DbPool,
}

impl DieselNotificationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for DieselNotificationRepository {
    async fn insert(&self, notification: &NewNotification) -> Result<u64, StoreError> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(notifications::table)
            .values(notification.as_row())
            .execute(&mut conn)
            .await?;

        // LAST_INSERT_ID() is per connection, so this is the row above.
        let id = diesel::select(sql::<Unsigned<BigInt>>("LAST_INSERT_ID()"))
            .get_result::<u64>(&mut conn)
            .await?;

        Ok(id)
    }

    async fn list_for_target(
        &self,
        target_user_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Notification>, u64), StoreError> {
        let mut conn = self.pool.get().await?;
        let limit = i64::try_from(limit).map_err(|e| StoreError::query(e.to_string()))?;
        let offset = i64::try_from(offset).map_err(|e| StoreError::query(e.to_string()))?;

        let total: i64 = notifications::table
            .filter(notifications::target_user_id.eq(target_user_id))
            .count()
            .get_result(&mut conn)
            .await?;

        let items = notifications::table
            .filter(notifications::target_user_id.eq(target_user_id))
            .order((notifications::created_at.desc(), notifications::id.desc()))
            .limit(limit)
            .offset(offset)
            .select(Notification::as_select())
            .load(&mut conn)
            .await?;

        Ok((items, total.unsigned_abs()))
    }
}
