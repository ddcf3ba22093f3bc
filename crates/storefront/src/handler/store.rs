use crate::{
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynStoreService,
    config::PaginationConfig,
    domain::{
        requests::{CreateStoreRequest, ListQuery, PatchRequest, UpdateStoreRequest},
        responses::{ApiResponse, StoreListResponse, StoreResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/store",
    tag = "Store",
    params(ListQuery),
    responses(
        (status = 200, description = "List of stores", body = ApiResponse<StoreListResponse>),
        (status = 400, description = "Invalid offset or limit")
    )
)]
pub async fn get_stores(
    Extension(service): Extension<DynStoreService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/store/{id}",
    tag = "Store",
    params(("id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store details", body = ApiResponse<StoreResponse>),
        (status = 404, description = "Store not found")
    )
)]
pub async fn get_store(
    Extension(service): Extension<DynStoreService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/store",
    tag = "Store",
    request_body = CreateStoreRequest,
    responses(
        (status = 201, description = "Store created", body = ApiResponse<StoreResponse>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_store(
    Extension(service): Extension<DynStoreService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateStoreRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_store(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/store/{id}",
    tag = "Store",
    params(("id" = i32, Path, description = "Store ID")),
    request_body = UpdateStoreRequest,
    responses(
        (status = 202, description = "Store updated", body = ApiResponse<StoreResponse>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn update_store(
    Extension(service): Extension<DynStoreService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateStoreRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_store(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/store/{id}",
    tag = "Store",
    params(("id" = i32, Path, description = "Store ID")),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Store patched", body = ApiResponse<StoreResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_store(
    Extension(service): Extension<DynStoreService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_store(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/store/{id}",
    tag = "Store",
    params(("id" = i32, Path, description = "Store ID")),
    responses(
        (status = 202, description = "Store deleted", body = ApiResponse<i32>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_store(
    Extension(service): Extension<DynStoreService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_store(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn store_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/store", get(get_stores).post(create_store))
        .route(
            "/store/{id}",
            get(get_store)
                .put(update_store)
                .patch(patch_store)
                .delete(delete_store),
        )
        .layer(Extension(app_state.di_container.store_service.clone()))
        .layer(Extension(app_state.pagination))
}
