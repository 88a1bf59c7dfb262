pub mod funding;
pub mod health;
pub mod notifications;
pub mod notify;

use fundhub_shared::errors::AppError;

pub async fn not_found() -> AppError {
    AppError::not_found("route not found")
}
