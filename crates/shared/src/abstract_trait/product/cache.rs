use crate::{
    domain::{requests::ListParams, responses::ProductListResponse},
    errors::CacheError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductCacheRepository = Arc<dyn ProductCacheRepositoryTrait + Send + Sync>;

/// Side cache of product listing pages, one entry per query fingerprint.
#[async_trait]
pub trait ProductCacheRepositoryTrait {
    async fn exists(&self, params: &ListParams) -> Result<bool, CacheError>;
    async fn get_list(&self, params: &ListParams) -> Result<ProductListResponse, CacheError>;
    async fn create(
        &self,
        params: &ListParams,
        listing: &ProductListResponse,
    ) -> Result<(), CacheError>;
    /// Drops every cached page. Succeeds when nothing is cached.
    async fn delete(&self) -> Result<(), CacheError>;
}
