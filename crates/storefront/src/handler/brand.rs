use crate::{
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::DynBrandService,
    config::PaginationConfig,
    domain::{
        requests::{CreateBrandRequest, ListQuery, PatchRequest, UpdateBrandRequest},
        responses::{ApiResponse, BrandListResponse, BrandResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/brand",
    tag = "Brand",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "List of brands", body = ApiResponse<BrandListResponse>),
        (status = 400, description = "Invalid offset or limit"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_brands(
    Extension(service): Extension<DynBrandService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/brand/{id}",
    tag = "Brand",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand details", body = ApiResponse<BrandResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Brand not found")
    )
)]
pub async fn get_brand(
    Extension(service): Extension<DynBrandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/brand",
    tag = "Brand",
    request_body = CreateBrandRequest,
    responses(
        (status = 201, description = "Brand created", body = ApiResponse<BrandResponse>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_brand(
    Extension(service): Extension<DynBrandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateBrandRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_brand(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/brand/{id}",
    tag = "Brand",
    params(("id" = i32, Path, description = "Brand ID")),
    request_body = UpdateBrandRequest,
    responses(
        (status = 202, description = "Brand updated", body = ApiResponse<BrandResponse>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn update_brand(
    Extension(service): Extension<DynBrandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateBrandRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_brand(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/brand/{id}",
    tag = "Brand",
    params(("id" = i32, Path, description = "Brand ID")),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Brand patched", body = ApiResponse<BrandResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_brand(
    Extension(service): Extension<DynBrandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_brand(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/brand/{id}",
    tag = "Brand",
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 202, description = "Brand deleted", body = ApiResponse<i32>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_brand(
    Extension(service): Extension<DynBrandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_brand(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn brand_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/brand", post(create_brand))
        .route(
            "/brand/{id}",
            put(update_brand).patch(patch_brand).delete(delete_brand),
        );

    let private_routes = OpenApiRouter::new()
        .route("/brand", get(get_brands))
        .route("/brand/{id}", get(get_brand))
        .route_layer(middleware::from_fn(auth_middleware));

    public_routes
        .merge(private_routes)
        .layer(Extension(app_state.di_container.brand_service.clone()))
        .layer(Extension(app_state.pagination))
        .layer(Extension(app_state.jwt_config.clone()))
}
