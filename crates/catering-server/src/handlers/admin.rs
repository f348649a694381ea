//! Administrative operations: seeding, full export, clear-all.

use axum::{
    http::header,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    db::{category, manufacturing_item, order, seed},
    error::Result,
    models::{category::Category, manufacturing_item::ManufacturingItem, order::Order},
};

/// Full data dump
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExportData {
    pub export_date: DateTime<Utc>,
    pub orders: Vec<Order>,
    pub categories: Vec<Category>,
    pub manufacturing_items: Vec<ManufacturingItem>,
    pub total_orders: usize,
    pub total_categories: usize,
    pub total_manufacturing_items: usize,
}

/// Reset the catalog to the reference dataset.
///
/// Replaces categories and manufacturing items; orders are left in place
/// (their totals are snapshots and stay valid for printing).
#[utoipa::path(
    post,
    path = "/seed",
    responses(
        (status = 200, description = "Database seeded successfully"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Admin"
)]
pub async fn seed_database() -> Result<Json<serde_json::Value>> {
    category::delete_all_categories().await?;
    manufacturing_item::delete_all_manufacturing_items().await?;

    seed::seed_categories().await?;
    seed::seed_manufacturing_items().await?;
    tracing::info!("Database seeded with the reference catalog");

    Ok(Json(json!({
        "success": true,
        "message": "Database seeded successfully",
    })))
}

/// Delete every order, category and manufacturing item
#[utoipa::path(
    delete,
    path = "/clear-all",
    responses(
        (status = 200, description = "All data cleared successfully"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Admin"
)]
pub async fn clear_all() -> Result<Json<serde_json::Value>> {
    order::delete_all_orders().await?;
    category::delete_all_categories().await?;
    manufacturing_item::delete_all_manufacturing_items().await?;
    tracing::warn!("All data cleared");

    Ok(Json(json!({
        "success": true,
        "message": "All data cleared successfully",
    })))
}

/// Export every record as a downloadable JSON document
#[utoipa::path(
    get,
    path = "/export",
    responses(
        (status = 200, description = "Full data export", body = ExportData),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Admin"
)]
pub async fn export_data() -> Result<impl IntoResponse> {
    let orders = order::list_orders().await?;
    let categories = category::list_categories().await?;
    let manufacturing_items = manufacturing_item::list_manufacturing_items().await?;

    let export = ExportData {
        export_date: Utc::now(),
        total_orders: orders.len(),
        total_categories: categories.len(),
        total_manufacturing_items: manufacturing_items.len(),
        orders,
        categories,
        manufacturing_items,
    };

    let filename = format!("catering-data-{}.json", export.export_date.date_naive());
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )],
        Json(export),
    ))
}
