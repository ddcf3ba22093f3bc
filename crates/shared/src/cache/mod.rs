mod cache_store;
mod product;

pub use self::cache_store::CacheStore;
pub use self::product::{ProductCacheRepository, product_list_key};
