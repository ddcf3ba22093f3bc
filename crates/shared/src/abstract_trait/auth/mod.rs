use crate::{
    domain::{
        requests::{CreateUserRequest, LoginRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn login_user(&self, req: &LoginRequest)
    -> Result<ApiResponse<TokenResponse>, ServiceError>;
}
