use std::sync::Arc;

use fundhub_shared::clients::db::DbPool;
use fundhub_shared::middleware::{init_metrics, init_tracing};

use fundhub_notification::config::AppConfig;
use fundhub_notification::routes::health::SERVICE_NAME;
use fundhub_notification::{startup, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(SERVICE_NAME);

    let config = AppConfig::load()?;
    let port = config.port;
    let metrics_handle = init_metrics()?;

    let pool = DbPool::connect(config.pool_config()).await?;
    let state = Arc::new(AppState::from_pool(config, pool, metrics_handle));

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "{SERVICE_NAME} starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    startup::serve(listener, Arc::clone(&state)).await?;

    // Last handle to the pool; its connections close here.
    drop(state);
    tracing::info!("database pool released, shutdown complete");

    Ok(())
}
