use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use storefront::{handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("storefront", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("✅ Migrations applied");
    }

    let port = config.port;

    let state = AppState::new(pool, &config)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
