use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynStockService,
    config::PaginationConfig,
    domain::{
        requests::{CreateStockRequest, ListQuery, PatchRequest, UpdateStockRequest},
        responses::{ApiResponse, StockKeyResponse, StockListResponse, StockResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/stock",
    tag = "Stock",
    params(ListQuery),
    responses(
        (status = 200, description = "List of stock rows", body = ApiResponse<StockListResponse>),
        (status = 400, description = "Invalid offset or limit")
    )
)]
pub async fn get_stocks(
    Extension(service): Extension<DynStockService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/stock/{store_id}/{product_id}",
    tag = "Stock",
    params(
        ("store_id" = i32, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Stock of one product at one store", body = ApiResponse<StockResponse>),
        (status = 404, description = "Stock not found")
    )
)]
pub async fn get_stock(
    Extension(service): Extension<DynStockService>,
    Path((store_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(store_id, product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/stock",
    tag = "Stock",
    request_body = CreateStockRequest,
    responses(
        (status = 201, description = "Stock created", body = ApiResponse<StockResponse>),
        (status = 404, description = "Store or product not found"),
        (status = 409, description = "Stock row already exists")
    )
)]
pub async fn create_stock(
    Extension(service): Extension<DynStockService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_stock(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/stock/{store_id}/{product_id}",
    tag = "Stock",
    params(
        ("store_id" = i32, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateStockRequest,
    responses(
        (status = 202, description = "Stock updated", body = ApiResponse<StockResponse>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn update_stock(
    Extension(service): Extension<DynStockService>,
    Path((store_id, product_id)): Path<(i32, i32)>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_stock(store_id, product_id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/stock/{store_id}/{product_id}",
    tag = "Stock",
    params(
        ("store_id" = i32, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Stock patched", body = ApiResponse<StockResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_stock(
    Extension(service): Extension<DynStockService>,
    Path((store_id, product_id)): Path<(i32, i32)>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_stock(store_id, product_id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/stock/{store_id}/{product_id}",
    tag = "Stock",
    params(
        ("store_id" = i32, Path, description = "Store ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 202, description = "Stock deleted", body = ApiResponse<StockKeyResponse>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_stock(
    Extension(service): Extension<DynStockService>,
    Path((store_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_stock(store_id, product_id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/stock", get(get_stocks).post(create_stock))
        .route(
            "/stock/{store_id}/{product_id}",
            get(get_stock)
                .put(update_stock)
                .patch(patch_stock)
                .delete(delete_stock),
        )
        .layer(Extension(app_state.di_container.stock_service.clone()))
        .layer(Extension(app_state.pagination))
}
