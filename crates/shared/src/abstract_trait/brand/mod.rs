use crate::{
    domain::{
        requests::{CreateBrandRequest, ListParams, PatchRequest, UpdateBrandRequest},
        responses::{ApiResponse, BrandListResponse, BrandResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Brand as BrandModel,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynBrandRepository = Arc<dyn BrandRepositoryTrait + Send + Sync>;
pub type DynBrandService = Arc<dyn BrandServiceTrait + Send + Sync>;

#[async_trait]
pub trait BrandRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<BrandModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<BrandModel>, RepositoryError>;
    async fn create_brand(&self, req: &CreateBrandRequest) -> Result<i32, RepositoryError>;
    async fn update_brand(&self, id: i32, req: &UpdateBrandRequest) -> Result<u64, RepositoryError>;
    async fn patch_brand(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_brand(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait BrandServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<BrandListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<BrandResponse>, ServiceError>;
    async fn create_brand(
        &self,
        req: &CreateBrandRequest,
    ) -> Result<ApiResponse<BrandResponse>, ServiceError>;
    async fn update_brand(
        &self,
        id: i32,
        req: &UpdateBrandRequest,
    ) -> Result<ApiResponse<BrandResponse>, ServiceError>;
    async fn patch_brand(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<BrandResponse>, ServiceError>;
    async fn delete_brand(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError>;
}
