use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository, DynUserService,
    },
    domain::{
        requests::{CreateUserRequest, LoginRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct AuthService {
    users: DynUserService,
    repository: DynUserRepository,
    hash: DynHashing,
    jwt: DynJwtService,
    metrics: Metrics,
}

pub struct AuthServiceDeps {
    pub users: DynUserService,
    pub repository: DynUserRepository,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            users,
            repository,
            hash,
            jwt,
            registry,
        } = deps;

        let metrics = Metrics::new();
        metrics.register("auth", &mut *registry.lock().await);

        Self {
            users,
            repository,
            hash,
            jwt,
            metrics,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                info!("📝 Registering user {}", req.login);

                let created = self.users.create_user(req).await?;
                Ok(ApiResponse::success("User registered successfully", created.data))
            })
            .await
    }

    async fn login_user(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                info!("🔐 Attempting login for {}", req.login);

                let Some(user) = self.repository.find_by_login(&req.login).await? else {
                    error!("❌ Unknown login: {}", req.login);
                    return Err(ServiceError::InvalidCredentials);
                };

                if self
                    .hash
                    .compare_password(&user.password, &req.password)
                    .await
                    .is_err()
                {
                    error!("❌ Invalid password for {}", req.login);
                    return Err(ServiceError::InvalidCredentials);
                }

                let access_token = self.jwt.generate_token(user.id, "access")?;

                info!("✅ Login successful for {}", req.login);
                Ok(ApiResponse::success(
                    "Login successful",
                    TokenResponse { access_token },
                ))
            })
            .await
    }
}
