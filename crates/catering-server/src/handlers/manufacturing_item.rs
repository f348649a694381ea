//! Manufacturing (equipment) item handlers

use axum::{extract::Path, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    db::manufacturing_item,
    error::{AppError, Result},
    models::manufacturing_item::{
        ManufacturingItem, ManufacturingItemCreate, ManufacturingItemUpdate,
    },
};

/// Response for single-item operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ManufacturingItemResponse {
    pub success: bool,
    pub data: Option<ManufacturingItem>,
    pub message: Option<String>,
}

/// Response for item listings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ManufacturingItemListResponse {
    pub success: bool,
    pub data: Vec<ManufacturingItem>,
    pub total: usize,
}

/// List the equipment ratio table
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Items listed", body = ManufacturingItemListResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "ManufacturingItem"
)]
pub async fn list_manufacturing_items() -> Result<Json<ManufacturingItemListResponse>> {
    let items = manufacturing_item::list_manufacturing_items().await?;
    Ok(Json(ManufacturingItemListResponse {
        success: true,
        total: items.len(),
        data: items,
    }))
}

/// Create a new manufacturing item
#[utoipa::path(
    post,
    path = "/",
    request_body = ManufacturingItemCreate,
    responses(
        (status = 201, description = "Item created successfully", body = ManufacturingItemResponse),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "ManufacturingItem"
)]
pub async fn create_manufacturing_item(
    Json(payload): Json<ManufacturingItemCreate>,
) -> Result<(StatusCode, Json<ManufacturingItemResponse>)> {
    payload.validate()?;

    let created = manufacturing_item::create_manufacturing_item(payload).await?;
    tracing::info!(
        "Created manufacturing item {} ({})",
        created.item_id,
        created.name
    );

    Ok((
        StatusCode::CREATED,
        Json(ManufacturingItemResponse {
            success: true,
            data: Some(created),
            message: Some("Manufacturing item created successfully".to_string()),
        }),
    ))
}

/// Get a manufacturing item by id
#[utoipa::path(
    get,
    path = "/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Manufacturing item id")
    ),
    responses(
        (status = 200, description = "Item found", body = ManufacturingItemResponse),
        (status = 404, description = "Item not found"),
    ),
    tag = "ManufacturingItem"
)]
pub async fn get_manufacturing_item(
    Path(item_id): Path<i64>,
) -> Result<Json<ManufacturingItemResponse>> {
    let item = manufacturing_item::get_manufacturing_item_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("manufacturing item {item_id}")))?;

    Ok(Json(ManufacturingItemResponse {
        success: true,
        data: Some(item),
        message: None,
    }))
}

/// Update a manufacturing item
#[utoipa::path(
    put,
    path = "/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Manufacturing item id")
    ),
    request_body = ManufacturingItemUpdate,
    responses(
        (status = 200, description = "Item updated successfully", body = ManufacturingItemResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Item not found"),
    ),
    tag = "ManufacturingItem"
)]
pub async fn update_manufacturing_item(
    Path(item_id): Path<i64>,
    Json(payload): Json<ManufacturingItemUpdate>,
) -> Result<Json<ManufacturingItemResponse>> {
    payload.validate()?;

    let updated = manufacturing_item::update_manufacturing_item(item_id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("manufacturing item {item_id}")))?;
    tracing::info!("Updated manufacturing item {item_id}");

    Ok(Json(ManufacturingItemResponse {
        success: true,
        data: Some(updated),
        message: Some("Manufacturing item updated successfully".to_string()),
    }))
}

/// Delete a manufacturing item
#[utoipa::path(
    delete,
    path = "/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Manufacturing item id")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = ManufacturingItemResponse),
        (status = 404, description = "Item not found"),
    ),
    tag = "ManufacturingItem"
)]
pub async fn delete_manufacturing_item(
    Path(item_id): Path<i64>,
) -> Result<Json<ManufacturingItemResponse>> {
    manufacturing_item::delete_manufacturing_item(item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("manufacturing item {item_id}")))?;
    tracing::info!("Deleted manufacturing item {item_id}");

    Ok(Json(ManufacturingItemResponse {
        success: true,
        data: None,
        message: Some("Manufacturing item deleted successfully".to_string()),
    }))
}
