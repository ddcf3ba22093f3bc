use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig, PaginationConfig, RedisClient},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub pagination: PaginationConfig,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hash = Arc::new(Hashing::new()) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));

        info!("Initializing Redis connection for the product cache");
        let redis = RedisClient::new(&config.redis).context("Failed to connect to Redis")?;
        redis.ping().await.context("Failed to ping Redis server")?;

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash,
            jwt_config: jwt_config.clone(),
            registry: registry.clone(),
            redis,
        })
        .await;

        Ok(Self {
            jwt_config,
            di_container,
            registry,
            pagination: config.pagination,
        })
    }
}
