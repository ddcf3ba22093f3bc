use crate::{
    domain::{
        requests::{CreateCategoryRequest, ListParams, PatchRequest, UpdateCategoryRequest},
        responses::{ApiResponse, CategoryListResponse, CategoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Category as CategoryModel,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;
pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<CategoryModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError>;
    async fn create_category(&self, req: &CreateCategoryRequest) -> Result<i32, RepositoryError>;
    async fn update_category(&self, id: i32, req: &UpdateCategoryRequest) -> Result<u64, RepositoryError>;
    async fn patch_category(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_category(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait CategoryServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<CategoryListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn patch_category(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError>;
}
