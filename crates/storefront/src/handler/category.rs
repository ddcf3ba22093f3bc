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
    routing::{get, post},
};
use shared::{
    abstract_trait::DynCategoryService,
    config::PaginationConfig,
    domain::{
        requests::{CreateCategoryRequest, ListQuery, PatchRequest, UpdateCategoryRequest},
        responses::{ApiResponse, CategoryListResponse, CategoryResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/category",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<CategoryListResponse>),
        (status = 400, description = "Invalid offset or limit"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
    Extension(pagination): Extension<PaginationConfig>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let params = query.resolve(&pagination)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/category/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/category",
    tag = "Category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/category/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 202, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_category(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/category/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = PatchRequest,
    responses(
        (status = 202, description = "Category patched", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Unknown field or no rows affected")
    )
)]
pub async fn patch_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<PatchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.patch_category(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/category/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 202, description = "Category deleted", body = ApiResponse<i32>),
        (status = 400, description = "No rows affected")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_category(id).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/category", post(create_category))
        .route(
            "/category/{id}",
            get(get_category)
                .put(update_category)
                .patch(patch_category)
                .delete(delete_category),
        );

    let private_routes = OpenApiRouter::new()
        .route("/category", get(get_categories))
        .route_layer(middleware::from_fn(auth_middleware));

    public_routes
        .merge(private_routes)
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.pagination))
        .layer(Extension(app_state.jwt_config.clone()))
}
