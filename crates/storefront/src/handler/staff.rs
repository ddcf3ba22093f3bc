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
    abstract_trait::DynStaffService,
    config::PaginationConfig,
    domain::{
        requests::{CreateStaffRequest, ListQuery, PatchRequest, UpdateStaffRequest},
        responses::{ApiResponse, StaffListResponse, StaffResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/staff",
    tag = "Staff",
    params(ListQuery),
    responses(
        (status = 200, description = "List of staff members", body = ApiResponse<StaffListResponse>),
        (status = 400, description = "Invalid offset or limit")
    )
)]
pub async fn get_staffs(
    Extension(service): Extension<DynStaffService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "Staff",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff details", body = ApiResponse<StaffResponse>),
        (status = 404, description = "Staff not found")
    )
)]
pub async fn get_staff(
    Extension(service): Extension<DynStaffService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/staff",
    tag = "Staff",
    request_body = CreateStaffRequest,
    responses(
        (status = 201, description = "Staff created", body = ApiResponse<StaffResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Store or manager not found")
    )
)]
pub async fn create_staff(
    Extension(service): Extension<DynStaffService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateStaffRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_staff(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/staff/{id}",
    tag = "Staff",
    params(("id" = i32, Path, description = "Staff ID")),
    request_body = UpdateStaffRequest,
    responses(
        (status = 202, description = "Staff updated", body = ApiResponse<StaffResponse>),
        (status = 400, description = "No rows affected"),
        (status = 404, description = "Store or manager not found")
    )
)]
pub async fn update_staff(
    Extension(service): Extension<DynStaffService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateStaffRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_staff(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/staff/{id}",
    tag = "Staff",
    params(("id" = i32, Path, description = "Staff ID")),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Staff patched", body = ApiResponse<StaffResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_staff(
    Extension(service): Extension<DynStaffService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_staff(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "Staff",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 202, description = "Staff deleted", body = ApiResponse<i32>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_staff(
    Extension(service): Extension<DynStaffService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_staff(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn staff_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/staff", get(get_staffs).post(create_staff))
        .route(
            "/staff/{id}",
            get(get_staff)
                .put(update_staff)
                .patch(patch_staff)
                .delete(delete_staff),
        )
        .layer(Extension(app_state.di_container.staff_service.clone()))
        .layer(Extension(app_state.pagination))
}
