use crate::{
    domain::{
        requests::{CreateUserRequest, ListParams, UpdateUserRequest},
        responses::{ApiResponse, UserListResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User as UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_all(&self, params: &ListParams)
    -> Result<(Vec<UserModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, RepositoryError>;
    async fn find_by_login(&self, login: &str) -> Result<Option<UserModel>, RepositoryError>;
    /// `password_hash` replaces the plain password carried by `req`.
    async fn create_user(
        &self,
        req: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<Uuid, RepositoryError>;
    async fn update_user(
        &self,
        id: Uuid,
        req: &UpdateUserRequest,
        password_hash: Option<&str>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_user(&self, id: Uuid) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<UserListResponse>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update_user(
        &self,
        id: Uuid,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn delete_user(&self, id: Uuid) -> Result<ApiResponse<Uuid>, ServiceError>;
}
