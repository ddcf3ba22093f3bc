use crate::{
    domain::{
        requests::{CreateCustomerRequest, ListParams, PatchRequest, UpdateCustomerRequest},
        responses::{ApiResponse, CustomerListResponse, CustomerResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Customer as CustomerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynCustomerRepository = Arc<dyn CustomerRepositoryTrait + Send + Sync>;
pub type DynCustomerService = Arc<dyn CustomerServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<CustomerModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerModel>, RepositoryError>;
    async fn create_customer(&self, req: &CreateCustomerRequest) -> Result<i32, RepositoryError>;
    async fn update_customer(&self, id: i32, req: &UpdateCustomerRequest) -> Result<u64, RepositoryError>;
    async fn patch_customer(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_customer(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait CustomerServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<CustomerListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn update_customer(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn patch_customer(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn delete_customer(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError>;
}
