//! Order data models

use std::collections::BTreeMap;

use catering_core::{Calculations, ItemSelection};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A captured client order.
///
/// `ingredient_totals` and `equipment_totals` are the snapshot computed
/// when the order was created or last explicitly recalculated. They stay
/// put when the catalog is edited later, so historical prints remain
/// stable; `/order/{id}/recalculate` is the only path that refreshes them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: String,
    pub client_name: String,
    pub phone: String,
    pub address: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub guest_count: i64,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub special_requests: String,
    pub category_id: i64,
    #[schema(value_type = Object)]
    pub selections: BTreeMap<String, ItemSelection>,
    #[schema(value_type = Object)]
    pub ingredient_totals: BTreeMap<String, f64>,
    #[schema(value_type = Object)]
    pub equipment_totals: BTreeMap<String, f64>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds a fresh pending order from a create payload and the totals
    /// just computed for it.
    pub fn from_payload(payload: OrderCreate, calculations: Calculations) -> Self {
        let now = Utc::now();
        Self {
            order_id: Uuid::new_v4().to_string(),
            client_name: payload.client_name,
            phone: payload.phone,
            address: payload.address,
            event_date: payload.event_date,
            event_time: payload.event_time,
            guest_count: payload.guest_count,
            event_type: payload.event_type,
            special_requests: payload.special_requests,
            category_id: payload.category_id,
            selections: payload.selections,
            ingredient_totals: calculations.ingredients,
            equipment_totals: calculations.equipment,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Create order payload. Totals are computed server-side from the chosen
/// category and the current equipment table; the guest count is validated
/// by the calculator itself.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct OrderCreate {
    #[validate(length(min = 1, max = 255))]
    pub client_name: String,
    #[validate(length(min = 1, max = 32))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub guest_count: i64,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub special_requests: String,
    pub category_id: i64,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub selections: BTreeMap<String, ItemSelection>,
}

/// Selections travel as a JSON object, so item ids arrive as string keys.
/// Non-numeric keys are dropped, the same way the calculator skips stale
/// ids.
pub fn selection_ids(
    selections: &BTreeMap<String, ItemSelection>,
) -> BTreeMap<i64, ItemSelection> {
    selections
        .iter()
        .filter_map(|(id, selection)| id.parse().ok().map(|id: i64| (id, *selection)))
        .collect()
}

/// Update order payload; absent fields are left untouched.
///
/// Deliberately does NOT recompute stored totals, even when the guest
/// count changes; recalculation is the explicit
/// `/order/{id}/recalculate` action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct OrderUpdate {
    #[validate(length(min = 1, max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[validate(length(min = 1, max = 32))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}
