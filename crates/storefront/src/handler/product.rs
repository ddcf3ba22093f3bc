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
    abstract_trait::DynProductService,
    config::PaginationConfig,
    domain::{
        requests::{CreateProductRequest, ListQuery, PatchRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductListResponse, ProductResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Pages already read since the last product write are served from the
/// listing cache.
#[utoipa::path(
    get,
    path = "/product",
    tag = "Product",
    params(ListQuery),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<ProductListResponse>),
        (status = 400, description = "Invalid offset or limit")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Brand or category not found")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 202, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "No rows affected"),
        (status = 404, description = "Brand or category not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Product patched", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_product(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 202, description = "Product deleted", body = ApiResponse<i32>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product", get(get_products).post(create_product))
        .route(
            "/product/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.pagination))
}
