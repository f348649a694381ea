//! Manufacturing (equipment) item data models

use catering_core::EquipmentRatio;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One entry of the equipment reference table: chairs, tables, stoves and
/// the like, with the fixed guests-per-batch divisor the calculator scales
/// by. Conceptually global configuration rather than per-order data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManufacturingItem {
    pub item_id: i64,
    pub name: String,
    /// Units issued per batch
    pub units_per_batch: f64,
    /// Guests covered by one batch
    pub people_per_batch: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ManufacturingItem {
    /// The calculator-facing view of this record.
    pub fn ratio(&self) -> EquipmentRatio {
        EquipmentRatio {
            name: self.name.clone(),
            units_per_batch: self.units_per_batch,
            people_per_batch: self.people_per_batch,
        }
    }
}

/// Create manufacturing item payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ManufacturingItemCreate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default = "default_units_per_batch")]
    pub units_per_batch: f64,
    #[validate(range(min = 1))]
    pub people_per_batch: i64,
}

fn default_units_per_batch() -> f64 {
    1.0
}

/// Update manufacturing item payload; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ManufacturingItemUpdate {
    #[validate(length(min = 1, max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_per_batch: Option<f64>,
    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_per_batch: Option<i64>,
}
