//! Category and menu item data models

use catering_core::MenuItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A themed grouping of menu items offered for an event.
///
/// Items are owned wholly by their category; there is no independent menu
/// item lifecycle. The SurrealDB record key duplicates `category_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    pub description: String,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<MenuItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Embedded menu items carry the quantities the calculator multiplies, so
/// they are checked at the same boundary as the rest of the payload.
fn validate_menu_items(items: &[MenuItem]) -> Result<(), ValidationError> {
    for item in items {
        if item.name.trim().is_empty() {
            return Err(ValidationError::new("menu_item_name_empty"));
        }
        if item.base_quantity <= 0.0 {
            return Err(ValidationError::new("menu_item_base_quantity_not_positive"));
        }
        if item.ingredients.is_empty()
            || item.ingredients.iter().any(|name| name.trim().is_empty())
        {
            return Err(ValidationError::new("menu_item_ingredients_empty"));
        }
    }
    Ok(())
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CategoryCreate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = validate_menu_items))]
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<MenuItem>,
}

/// Update category payload; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CategoryUpdate {
    #[validate(length(min = 1, max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = validate_menu_items))]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub items: Option<Vec<MenuItem>>,
}
