use crate::{
    domain::{
        requests::{CreateStoreRequest, ListParams, PatchRequest, UpdateStoreRequest},
        responses::{ApiResponse, StoreListResponse, StoreResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Store as StoreModel,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynStoreRepository = Arc<dyn StoreRepositoryTrait + Send + Sync>;
pub type DynStoreService = Arc<dyn StoreServiceTrait + Send + Sync>;

#[async_trait]
pub trait StoreRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<StoreModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<StoreModel>, RepositoryError>;
    async fn create_store(&self, req: &CreateStoreRequest) -> Result<i32, RepositoryError>;
    async fn update_store(&self, id: i32, req: &UpdateStoreRequest) -> Result<u64, RepositoryError>;
    async fn patch_store(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_store(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait StoreServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<StoreListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn create_store(
        &self,
        req: &CreateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn update_store(
        &self,
        id: i32,
        req: &UpdateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn patch_store(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn delete_store(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError>;
}
