use crate::{
    abstract_trait::{DynHashing, DynUserRepository, UserServiceTrait},
    domain::{
        requests::{CreateUserRequest, ListParams, UpdateUserRequest},
        responses::{ApiResponse, UserListResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

pub struct UserService {
    repository: DynUserRepository,
    hash: DynHashing,
    metrics: Metrics,
}

impl UserService {
    pub async fn new(
        repository: DynUserRepository,
        hash: DynHashing,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("user", &mut *registry.lock().await);

        Self {
            repository,
            hash,
            metrics,
        }
    }

    async fn load(&self, id: Uuid) -> Result<UserResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ServiceError::not_found("user", id))
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<UserListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (users, count) = self.repository.find_all(params).await?;

                Ok(ApiResponse::success(
                    "User list retrieved successfully",
                    UserListResponse {
                        count,
                        users: users.into_iter().map(UserResponse::from).collect(),
                    },
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let user = self.load(id).await?;
                Ok(ApiResponse::success("User retrieved successfully", user))
            })
            .await
    }

    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                let hashed = self.hash.hash_password(&req.password).await?;
                let id = self.repository.create_user(req, &hashed).await?;
                let user = self.load(id).await?;

                info!("✅ User {} created with ID {id}", req.login);
                Ok(ApiResponse::success("User created successfully", user))
            })
            .await
    }

    async fn update_user(
        &self,
        id: Uuid,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                let hashed = match &req.password {
                    Some(password) => Some(self.hash.hash_password(password).await?),
                    None => None,
                };

                if self
                    .repository
                    .update_user(id, req, hashed.as_deref())
                    .await?
                    == 0
                {
                    return Err(ServiceError::NoRowsAffected);
                }
                let user = self.load(id).await?;

                Ok(ApiResponse::success("User updated successfully", user))
            })
            .await
    }

    async fn delete_user(&self, id: Uuid) -> Result<ApiResponse<Uuid>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.repository.delete_user(id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ User {id} deleted");
                Ok(ApiResponse::success("User deleted successfully", id))
            })
            .await
    }
}
