mod cache;

pub use self::cache::{DynProductCacheRepository, ProductCacheRepositoryTrait};

use crate::{
    domain::{
        requests::{CreateProductRequest, ListParams, PatchRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductListResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    async fn create_product(&self, req: &CreateProductRequest) -> Result<i32, RepositoryError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError>;
    async fn patch_product(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    /// Serves the page from the listing cache when present, otherwise from
    /// the database, populating the cache on the way out.
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ProductListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn patch_product(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError>;
}
