//! Order handlers: capture, snapshot calculation, explicit recalculation
//! and the print view.

use axum::{extract::Path, http::StatusCode, response::Json};
use catering_core::{format_quantity, Unit};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    db::{category, manufacturing_item, order},
    error::{AppError, Result},
    models::order::{selection_ids, Order, OrderCreate, OrderUpdate},
};

/// Response for single-order operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub success: bool,
    pub data: Option<Order>,
    pub message: Option<String>,
}

/// Response for order listings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderListResponse {
    pub success: bool,
    pub data: Vec<Order>,
    pub total: usize,
}

/// One formatted line of the print view
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrintLine {
    pub name: String,
    pub quantity: f64,
    pub display: String,
}

/// Print-view payload: the stored snapshot with display-formatted
/// quantities. Rendering/layout stays with the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrintableOrder {
    pub order_id: String,
    pub client_name: String,
    pub phone: String,
    pub address: String,
    pub event_date: String,
    pub event_time: String,
    pub guest_count: i64,
    pub event_type: String,
    pub ingredients: Vec<PrintLine>,
    pub equipment: Vec<PrintLine>,
}

/// List all orders, newest first
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Orders listed", body = OrderListResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Order"
)]
pub async fn list_orders() -> Result<Json<OrderListResponse>> {
    let orders = order::list_orders().await?;
    Ok(Json(OrderListResponse {
        success: true,
        total: orders.len(),
        data: orders,
    }))
}

/// Create a new order.
///
/// Runs the requirement calculator against the chosen category and the
/// current equipment table, then persists the inputs together with the
/// computed totals as the order's snapshot.
#[utoipa::path(
    post,
    path = "/",
    request_body = OrderCreate,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Order"
)]
pub async fn create_order(
    Json(payload): Json<OrderCreate>,
) -> Result<(StatusCode, Json<OrderResponse>)> {
    payload.validate()?;

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

    let created = order::create_order(Order::from_payload(payload, calculations)).await?;
    tracing::info!(
        "Created order {} for {} ({} guests)",
        created.order_id,
        created.client_name,
        created.guest_count
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            success: true,
            data: Some(created),
            message: Some("Order created successfully".to_string()),
        }),
    ))
}

/// Get an order by id
#[utoipa::path(
    get,
    path = "/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "Order"
)]
pub async fn get_order(Path(order_id): Path<String>) -> Result<Json<OrderResponse>> {
    let order = order::get_order_by_id(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

    Ok(Json(OrderResponse {
        success: true,
        data: Some(order),
        message: None,
    }))
}

/// Update an order (no recomputation; stored totals keep their snapshot)
#[utoipa::path(
    put,
    path = "/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    request_body = OrderUpdate,
    responses(
        (status = 200, description = "Order updated successfully", body = OrderResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Order"
)]
pub async fn update_order(
    Path(order_id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> Result<Json<OrderResponse>> {
    payload.validate()?;

    let updated = order::update_order(&order_id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;
    tracing::info!("Updated order {order_id}");

    Ok(Json(OrderResponse {
        success: true,
        data: Some(updated),
        message: Some("Order updated successfully".to_string()),
    }))
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order deleted successfully", body = OrderResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "Order"
)]
pub async fn delete_order(Path(order_id): Path<String>) -> Result<Json<OrderResponse>> {
    order::delete_order(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;
    tracing::info!("Deleted order {order_id}");

    Ok(Json(OrderResponse {
        success: true,
        data: None,
        message: Some("Order deleted successfully".to_string()),
    }))
}

/// Explicitly recompute an order's totals from the live catalog.
///
/// The full re-derive: both totals are rebuilt from the order's stored
/// guest count and selections against the category and equipment table as
/// they exist right now, and the refreshed snapshot is persisted.
#[utoipa::path(
    post,
    path = "/{order_id}/recalculate",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Totals recalculated", body = OrderResponse),
        (status = 400, description = "Order no longer computes cleanly"),
        (status = 404, description = "Order or its category not found"),
    ),
    tag = "Order"
)]
pub async fn recalculate_order(Path(order_id): Path<String>) -> Result<Json<OrderResponse>> {
    let existing = order::get_order_by_id(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

    let category = category::get_category_by_id(existing.category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {}", existing.category_id)))?;
    let ratios = manufacturing_item::list_equipment_ratios().await?;

    let calculations = catering_core::calculate(
        existing.guest_count,
        &category.items,
        &selection_ids(&existing.selections),
        &ratios,
    )?;

    let updated = order::set_order_totals(&order_id, calculations)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;
    tracing::info!("Recalculated totals for order {order_id}");

    Ok(Json(OrderResponse {
        success: true,
        data: Some(updated),
        message: Some("Order totals recalculated".to_string()),
    }))
}

/// Print view of an order's stored snapshot
#[utoipa::path(
    get,
    path = "/{order_id}/print",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Printable order", body = PrintableOrder),
        (status = 404, description = "Order not found"),
    ),
    tag = "Order"
)]
pub async fn print_order(Path(order_id): Path<String>) -> Result<Json<PrintableOrder>> {
    let order = order::get_order_by_id(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

    let ingredients = order
        .ingredient_totals
        .iter()
        .map(|(name, quantity)| PrintLine {
            name: name.clone(),
            quantity: *quantity,
            display: format_quantity(*quantity, Unit::Grams),
        })
        .collect();
    let equipment = order
        .equipment_totals
        .iter()
        .map(|(name, quantity)| PrintLine {
            name: name.clone(),
            quantity: *quantity,
            display: format_quantity(*quantity, Unit::Pieces),
        })
        .collect();

    Ok(Json(PrintableOrder {
        order_id: order.order_id,
        client_name: order.client_name,
        phone: order.phone,
        address: order.address,
        event_date: order.event_date.to_string(),
        event_time: order.event_time,
        guest_count: order.guest_count,
        event_type: order.event_type,
        ingredients,
        equipment,
    }))
}
