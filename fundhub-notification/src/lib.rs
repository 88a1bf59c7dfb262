pub mod config;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod startup;
pub mod validation;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use fundhub_shared::clients::db::DbPool;

use config::AppConfig;
use repositories::{
    DieselFundRepository, DieselNotificationRepository, FundRepository, NotificationRepository,
    StoreProbe,
};

pub struct AppState {
    pub config: AppConfig,
    pub notifications: Arc<dyn NotificationRepository>,
    pub funds: Arc<dyn FundRepository>,
    pub store: Arc<dyn StoreProbe>,
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Wire every store port to the same MySQL pool.
    pub fn from_pool(config: AppConfig, pool: DbPool, metrics_handle: PrometheusHandle) -> Self {
        Self {
            config,
            notifications: Arc::new(DieselNotificationRepository::new(pool.clone())),
            funds: Arc::new(DieselFundRepository::new(pool.clone())),
            store: Arc::new(pool),
            metrics_handle,
        }
    }
}
