//! Standalone requirement calculation; nothing is persisted.

use std::collections::BTreeMap;

use axum::response::Json;
use catering_core::{format_quantity, ItemSelection, Unit};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    db::{category, manufacturing_item},
    error::{AppError, Result},
    models::order::selection_ids,
};

/// Calculation request: guest count, a category and the item selections
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculationRequest {
    pub guest_count: i64,
    pub category_id: i64,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub selections: BTreeMap<String, ItemSelection>,
}

/// Raw totals plus their display-formatted counterparts
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    pub success: bool,
    pub guest_count: i64,
    #[schema(value_type = Object)]
    pub ingredient_totals: BTreeMap<String, f64>,
    #[schema(value_type = Object)]
    pub equipment_totals: BTreeMap<String, f64>,
    #[schema(value_type = Object)]
    pub ingredient_display: BTreeMap<String, String>,
    #[schema(value_type = Object)]
    pub equipment_display: BTreeMap<String, String>,
}

/// Run the requirement calculator without touching any order
#[utoipa::path(
    post,
    path = "/",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Requirements calculated", body = CalculationResponse),
        (status = 400, description = "Invalid guest count or empty selection"),
        (status = 404, description = "Category not found"),
    ),
    tag = "Calculation"
)]
pub async fn calculate_requirements(
    Json(payload): Json<CalculationRequest>,
) -> Result<Json<CalculationResponse>> {
    let category = category::get_category_by_id(payload.category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {}", payload.category_id)))?;
    let ratios = manufacturing_item::list_equipment_ratios().await?;

    let calculations = catering_core::calculate(
        payload.guest_count,
        &category.items,
        &selection_ids(&payload.selections),
        &ratios,
    )?;

    let ingredient_display = calculations
        .ingredients
        .iter()
        .map(|(name, quantity)| (name.clone(), format_quantity(*quantity, Unit::Grams)))
        .collect();
    let equipment_display = calculations
        .equipment
        .iter()
        .map(|(name, quantity)| (name.clone(), format_quantity(*quantity, Unit::Pieces)))
        .collect();

    Ok(Json(CalculationResponse {
        success: true,
        guest_count: payload.guest_count,
        ingredient_totals: calculations.ingredients,
        equipment_totals: calculations.equipment,
        ingredient_display,
        equipment_display,
    }))
}
