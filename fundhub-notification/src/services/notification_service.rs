use metrics::counter;

use fundhub_shared::errors::AppResult;
use fundhub_shared::types::pagination::{Paginated, PaginationParams};

use crate::models::{NewNotification, Notification};
use crate::repositories::NotificationRepository;

/// Write one validated notification. No retry: a store failure is final.
pub async fn create_notification(
    repo: &dyn NotificationRepository,
    notification: &NewNotification,
) -> AppResult<u64> {
    let notification_type = notification.kind.type_name();

    match repo.insert(notification).await {
        Ok(id) => {
            counter!("notifications_created_total", "type" => notification_type).increment(1);
            tracing::info!(
                notification_id = id,
                fund_id = notification.fund_id,
                notification_type,
                "notification created"
            );
            Ok(id)
        }
        Err(e) => {
            counter!("notifications_failed_total", "type" => notification_type).increment(1);
            tracing::error!(
                error = %e,
                fund_id = notification.fund_id,
                notification_type,
                "failed to create notification"
            );
            Err(e.into())
        }
    }
}

/// List notifications addressed to a user with pagination.
pub async fn list_notifications(
    repo: &dyn NotificationRepository,
    target_user_id: &str,
    params: &PaginationParams,
) -> AppResult<Paginated<Notification>> {
    params.validate()?;

    let (items, total) = repo
        .list_for_target(target_user_id, params.limit(), params.offset())
        .await?;

    Ok(Paginated::new(items, total, params))
}
