use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    config::PaginationConfig,
    domain::{
        requests::{CreateOrderRequest, ListQuery, PatchRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderListResponse, OrderResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Search matches the order id, customer and staff names and the store name.
#[utoipa::path(
    get,
    path = "/order",
    tag = "Order",
    params(ListQuery),
    responses(
        (status = 200, description = "List of orders with their items", body = ApiResponse<OrderListResponse>),
        (status = 400, description = "Invalid offset or limit")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/order/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/order",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Customer, store or staff not found")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/order/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 202, description = "Order updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "No rows affected"),
        (status = 404, description = "Customer, store or staff not found")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/order/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Order patched", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_order(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// Deleting an order removes its items and puts their quantities back in stock.
#[utoipa::path(
    delete,
    path = "/order/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 202, description = "Order deleted", body = ApiResponse<i32>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_order(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/order", get(get_orders).post(create_order))
        .route(
            "/order/{id}",
            get(get_order)
                .put(update_order)
                .patch(patch_order)
                .delete(delete_order),
        )
        .layer(Extension(app_state.di_container.order_service.query.clone()))
        .layer(Extension(app_state.di_container.order_service.command.clone()))
        .layer(Extension(app_state.pagination))
}
