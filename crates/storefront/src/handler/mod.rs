mod auth;
mod brand;
mod category;
mod customer;
mod order;
mod order_item;
mod product;
mod staff;
mod stock;
mod store;
mod user;

use crate::{middleware::cors::cors_middleware, state::AppState};
use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::brand::brand_routes;
pub use self::category::category_routes;
pub use self::customer::customer_routes;
pub use self::order::order_routes;
pub use self::order_item::order_item_routes;
pub use self::product::product_routes;
pub use self::staff::staff_routes;
pub use self::stock::stock_routes;
pub use self::store::store_routes;
pub use self::user::user_routes;

const BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_user_handler,
        auth::register_user_handler,

        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,

        brand::get_brands,
        brand::get_brand,
        brand::create_brand,
        brand::update_brand,
        brand::patch_brand,
        brand::delete_brand,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::patch_category,
        category::delete_category,

        customer::get_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::patch_customer,
        customer::delete_customer,

        store::get_stores,
        store::get_store,
        store::create_store,
        store::update_store,
        store::patch_store,
        store::delete_store,

        staff::get_staffs,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::patch_staff,
        staff::delete_staff,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::patch_product,
        product::delete_product,

        stock::get_stocks,
        stock::get_stock,
        stock::create_stock,
        stock::update_stock,
        stock::patch_stock,
        stock::delete_stock,

        order::get_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::patch_order,
        order::delete_order,

        order_item::create_order_item,
        order_item::delete_order_item,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "User", description = "User endpoints"),
        (name = "Brand", description = "Brand endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Customer", description = "Customer endpoints"),
        (name = "Store", description = "Store endpoints"),
        (name = "Staff", description = "Staff endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Stock", description = "Stock per store and product"),
        (name = "Order", description = "Order endpoints"),
        (name = "Order Item", description = "Order line endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {e}"),
        );
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
}

pub struct AppRouter;

impl AppRouter {
    /// Assembles every route, the OpenAPI document and the shared layers.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(brand_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(store_routes(shared_state.clone()))
            .merge(staff_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(stock_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(order_item_routes(shared_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(cors_middleware))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
