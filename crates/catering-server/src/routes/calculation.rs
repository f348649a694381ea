use axum::{routing::post, Router};
use utoipa::OpenApi;

use crate::handlers::calculation::calculate_requirements;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::calculation::calculate_requirements),
    tags(
        (name = "Calculation", description = "Ad-hoc requirement calculation APIs")
    ),
)]
pub struct CalculationApi;

pub fn create_router() -> Router {
    Router::new().route("/", post(calculate_requirements))
}
