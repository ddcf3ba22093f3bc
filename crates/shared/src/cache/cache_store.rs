use crate::errors::CacheError;
use chrono::Duration;
use deadpool_redis::{Connection, Pool};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, error};

const SCAN_BATCH: usize = 100;

#[derive(Clone)]
pub struct CacheStore {
    redis_pool: Arc<Pool>,
}

impl CacheStore {
    pub fn new(redis_pool: Pool) -> Self {
        Self {
            redis_pool: Arc::new(redis_pool),
        }
    }

    async fn get_conn(&self) -> Result<Connection, CacheError> {
        self.redis_pool.get().await.map_err(|e| {
            error!("Failed to get Redis pooled connection: {:?}", e);
            CacheError::from(e)
        })
    }

    pub async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.get_conn().await?;
        let found: bool = redis::cmd("EXISTS")
            .arg(key)
            .query_async(&mut conn)
            .await?;
        Ok(found)
    }

    pub async fn get_json<T>(&self, key: &str) -> Result<Option<T>, CacheError>
    where
        T: DeserializeOwned,
    {
        let mut conn = self.get_conn().await?;
        let data: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;

        match data {
            Some(data) => Ok(Some(serde_json::from_str::<T>(&data)?)),
            None => Ok(None),
        }
    }

    /// Stores `data` as JSON. Without `expiration` the key never expires.
    pub async fn set_json<T>(
        &self,
        key: &str,
        data: &T,
        expiration: Option<Duration>,
    ) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let json_data = serde_json::to_string(data)?;
        let mut conn = self.get_conn().await?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(&json_data);
        if let Some(ttl) = expiration {
            cmd.arg("EX").arg(ttl.num_seconds());
        }
        cmd.query_async::<()>(&mut conn).await?;

        debug!("Cached key '{}' with TTL {:?}", key, expiration);
        Ok(())
    }

    /// Deletes every key matching `pattern`, walking the keyspace with SCAN.
    pub async fn delete_matching(&self, pattern: &str) -> Result<u64, CacheError> {
        let mut conn = self.get_conn().await?;
        let mut cursor: u64 = 0;
        let mut deleted: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;

            if !keys.is_empty() {
                let removed: u64 = redis::cmd("DEL").arg(&keys).query_async(&mut conn).await?;
                deleted += removed;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        debug!("Deleted {} keys matching '{}'", deleted, pattern);
        Ok(deleted)
    }
}
