use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynUserService,
    config::PaginationConfig,
    domain::{
        requests::{CreateUserRequest, ListQuery, UpdateUserRequest},
        responses::{ApiResponse, UserListResponse, UserResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/user",
    tag = "User",
    params(ListQuery),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<UserListResponse>),
        (status = 400, description = "Invalid offset or limit")
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "User",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "User",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 409, description = "Login already taken")
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "User",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 202, description = "User updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_user(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "User",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 202, description = "User deleted", body = ApiResponse<Uuid>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_user(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/user", get(get_users).post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(Extension(app_state.di_container.user_service.clone()))
        .layer(Extension(app_state.pagination))
}
