use axum::response::Json;
use serde_json::json;

use crate::db::get_db;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "Health"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "catering-server"
    }))
}

/// Database connectivity probe
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service status information"),
    ),
    tag = "Health"
)]
pub async fn db_status() -> Json<serde_json::Value> {
    match get_db().query("RETURN 1").await {
        Ok(_) => Json(json!({
            "database": "connected",
        })),
        Err(e) => Json(json!({
            "database": "unavailable",
            "message": e.to_string(),
        })),
    }
}
