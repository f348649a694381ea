mod admin;
mod calculation;
mod category;
mod health;
mod manufacturing_item;
mod order;

use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::routes::{
    admin::AdminApi, calculation::CalculationApi, category::CategoryApi, health::HealthApi,
    manufacturing_item::ManufacturingItemApi, order::OrderApi,
};

#[derive(OpenApi)]
#[openapi(
    nest(
        (path = "/health", api = HealthApi),
        (path = "/category", api = CategoryApi),
        (path = "/manufacturing-item", api = ManufacturingItemApi),
        (path = "/order", api = OrderApi),
        (path = "/calculation", api = CalculationApi),
        (path = "/admin", api = AdminApi),
    ),
    info(
        title = "Catering Server API",
        description = "Order management and requirement calculation for catering events"
    )
)]
struct ApiDoc;

pub fn create_routes() -> Router {
    let cors = CorsLayer::permissive();
    let doc = ApiDoc::openapi();

    Router::new()
        .nest("/health", health::create_router())
        .nest("/category", category::create_router())
        .nest("/manufacturing-item", manufacturing_item::create_router())
        .nest("/order", order::create_router())
        .nest("/calculation", calculation::create_router())
        .nest("/admin", admin::create_router())
        .layer(cors)
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(doc) }),
        )
}
