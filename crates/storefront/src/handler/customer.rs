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
    abstract_trait::DynCustomerService,
    config::PaginationConfig,
    domain::{
        requests::{CreateCustomerRequest, ListQuery, PatchRequest, UpdateCustomerRequest},
        responses::{ApiResponse, CustomerListResponse, CustomerResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/customer",
    tag = "Customer",
    params(ListQuery),
    responses(
        (status = 200, description = "List of customers", body = ApiResponse<CustomerListResponse>),
        (status = 400, description = "Invalid offset or limit")
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/customer/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/customer",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_customer(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/customer/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 202, description = "Customer updated", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_customer(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/customer/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Customer patched", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_customer(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/customer/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 202, description = "Customer deleted", body = ApiResponse<i32>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_customer(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/customer", get(get_customers).post(create_customer))
        .route(
            "/customer/{id}",
            get(get_customer)
                .put(update_customer)
                .patch(patch_customer)
                .delete(delete_customer),
        )
        .layer(Extension(app_state.di_container.customer_service.clone()))
        .layer(Extension(app_state.pagination))
}
