use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use shared::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{CreateUserRequest, LoginRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login_user(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 409, description = "Login already taken")
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/register", post(register_user_handler))
        .route("/login", post(login_user_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
