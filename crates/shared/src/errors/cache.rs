use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Cache miss for key: {0}")]
    Miss(String),

    #[error("Cache payload error: {0}")]
    Serialization(#[from] serde_json::Error),
}
