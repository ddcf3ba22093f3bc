mod database;
mod hashing;
mod jwt;
mod myconfig;
mod redis;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig};
pub use self::myconfig::{Config, PaginationConfig};
pub use self::redis::{RedisClient, RedisConfig};
