use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
};
use serde::Deserialize;
use shared::{
    abstract_trait::DynOrderCommandService,
    domain::{requests::CreateOrderItemRequest, responses::{ApiResponse, OrderResponse}},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderItemKey {
    /// Item number within the order.
    pub item_id: i32,
}

/// Adds a line to an order, drawing the quantity from the stock of the
/// order's store. Responds with the whole order.
#[utoipa::path(
    post,
    path = "/order_item",
    tag = "Order Item",
    request_body = CreateOrderItemRequest,
    responses(
        (status = 201, description = "Item added", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Insufficient stock"),
        (status = 404, description = "Order or stock not found")
    )
)]
pub async fn create_order_item(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order_item(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/order_item/{id}",
    tag = "Order Item",
    params(("id" = i32, Path, description = "Order ID"), OrderItemKey),
    responses(
        (status = 204, description = "Item removed and its quantity restored"),
        (status = 400, description = "Invalid id or no rows affected")
    )
)]
pub async fn delete_order_item(
    Extension(service): Extension<DynOrderCommandService>,
    Path(order_id): Path<i32>,
    Query(key): Query<OrderItemKey>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order_item(order_id, key.item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/order_item", post(create_order_item))
        .route("/order_item/{id}", delete(delete_order_item))
        .layer(Extension(app_state.di_container.order_service.command.clone()))
}
