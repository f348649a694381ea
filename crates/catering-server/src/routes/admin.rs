use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;

use crate::handlers::admin::{clear_all, export_data, seed_database};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::admin::seed_database,
        crate::handlers::admin::clear_all,
        crate::handlers::admin::export_data,
    ),
    tags(
        (name = "Admin", description = "Database seeding and export APIs")
    ),
)]
pub struct AdminApi;

pub fn create_router() -> Router {
    Router::new()
        .route("/seed", post(seed_database))
        .route("/clear-all", delete(clear_all))
        .route("/export", get(export_data))
}
