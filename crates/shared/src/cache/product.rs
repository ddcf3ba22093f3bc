use crate::{
    abstract_trait::ProductCacheRepositoryTrait,
    cache::CacheStore,
    domain::{requests::ListParams, responses::ProductListResponse},
    errors::CacheError,
};
use async_trait::async_trait;
use tracing::info;

const PRODUCT_LIST_PREFIX: &str = "product_list";

/// Cache key of one listing page: offset, limit and search all take part.
pub fn product_list_key(params: &ListParams) -> String {
    format!(
        "{PRODUCT_LIST_PREFIX}:offset:{}:limit:{}:search:{}",
        params.offset,
        params.limit,
        params.search.as_deref().unwrap_or_default()
    )
}

#[derive(Clone)]
pub struct ProductCacheRepository {
    store: CacheStore,
}

impl ProductCacheRepository {
    pub fn new(store: CacheStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductCacheRepositoryTrait for ProductCacheRepository {
    async fn exists(&self, params: &ListParams) -> Result<bool, CacheError> {
        self.store.exists(&product_list_key(params)).await
    }

    async fn get_list(&self, params: &ListParams) -> Result<ProductListResponse, CacheError> {
        let key = product_list_key(params);
        self.store
            .get_json::<ProductListResponse>(&key)
            .await?
            .ok_or(CacheError::Miss(key))
    }

    async fn create(
        &self,
        params: &ListParams,
        listing: &ProductListResponse,
    ) -> Result<(), CacheError> {
        self.store
            .set_json(&product_list_key(params), listing, None)
            .await
    }

    async fn delete(&self) -> Result<(), CacheError> {
        let removed = self
            .store
            .delete_matching(&format!("{PRODUCT_LIST_PREFIX}*"))
            .await?;

        info!("🧹 Invalidated {} cached product pages", removed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_covers_every_query_dimension() {
        assert_eq!(
            product_list_key(&ListParams::new(0, 10, None)),
            "product_list:offset:0:limit:10:search:"
        );
        assert_eq!(
            product_list_key(&ListParams::new(20, 5, Some("trek"))),
            "product_list:offset:20:limit:5:search:trek"
        );
    }

    #[test]
    fn different_pages_never_share_a_key() {
        let first = product_list_key(&ListParams::new(0, 10, None));
        let second = product_list_key(&ListParams::new(10, 10, None));
        assert_ne!(first, second);
    }
}
