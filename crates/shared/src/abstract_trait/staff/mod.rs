use crate::{
    domain::{
        requests::{CreateStaffRequest, ListParams, PatchRequest, UpdateStaffRequest},
        responses::{ApiResponse, StaffListResponse, StaffResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Staff as StaffModel,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynStaffRepository = Arc<dyn StaffRepositoryTrait + Send + Sync>;
pub type DynStaffService = Arc<dyn StaffServiceTrait + Send + Sync>;

#[async_trait]
pub trait StaffRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<StaffModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<StaffModel>, RepositoryError>;
    async fn create_staff(&self, req: &CreateStaffRequest) -> Result<i32, RepositoryError>;
    async fn update_staff(&self, id: i32, req: &UpdateStaffRequest) -> Result<u64, RepositoryError>;
    async fn patch_staff(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_staff(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait StaffServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<StaffListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<StaffResponse>, ServiceError>;
    async fn create_staff(
        &self,
        req: &CreateStaffRequest,
    ) -> Result<ApiResponse<StaffResponse>, ServiceError>;
    async fn update_staff(
        &self,
        id: i32,
        req: &UpdateStaffRequest,
    ) -> Result<ApiResponse<StaffResponse>, ServiceError>;
    async fn patch_staff(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<StaffResponse>, ServiceError>;
    async fn delete_staff(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError>;
}
