use crate::config::RedisConfig;
use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct PaginationConfig {
    pub default_offset: i64,
    pub default_limit: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_offset: 0,
            default_limit: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub redis: RedisConfig,
    pub pagination: PaginationConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn = env_or("DB_MAX_CONNECTION", 20u32)?;
        let db_min_conn = env_or("DB_MIN_CONNECTION", 1u32)?;

        let redis = RedisConfig::new(
            std::env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string()),
            env_or("REDIS_PORT", 6379u16)?,
            env_or("REDIS_DB", 0u8)?,
            std::env::var("REDIS_PASSWORD")
                .ok()
                .filter(|pw| !pw.is_empty()),
        );

        let pagination = PaginationConfig {
            default_offset: env_or("OFFSET", 0i64)?,
            default_limit: env_or("LIMIT", 10i64)?,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            db_max_conn,
            db_min_conn,
            redis,
            pagination,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Unable to parse {key}")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_to_default_when_unset() {
        let value: u32 = env_or("RETAIL_TEST_SURELY_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn pagination_defaults_match_list_defaults() {
        let pagination = PaginationConfig::default();
        assert_eq!(pagination.default_offset, 0);
        assert_eq!(pagination.default_limit, 10);
    }
}
