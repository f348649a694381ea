//! Input vocabulary of the requirement calculator

use std::fmt;

use serde::{Deserialize, Serialize};

/// Variety group of a menu item. Classification only; the calculator never
/// looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Bhajiya,
    Chaat,
}

/// A dish offered inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Raw ingredients that go into the dish
    pub ingredients: Vec<String>,
    /// Grams per person (pieces for piece-based items)
    pub base_quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
}

/// One entry of the fixed equipment reference table: how many guests one
/// batch of this physical item covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRatio {
    pub name: String,
    /// Units issued per batch
    #[serde(default = "default_units_per_batch")]
    pub units_per_batch: f64,
    /// Guests covered by one batch
    pub people_per_batch: i64,
}

fn default_units_per_batch() -> f64 {
    1.0
}

/// Per-item choice on an order: whether the item is in, and how many
/// preparation variants of it are served.
///
/// An absent or zero `variety` counts as 1; `selected` alone decides
/// whether the item contributes at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSelection {
    pub selected: bool,
    #[serde(default = "default_variety")]
    pub variety: u32,
}

fn default_variety() -> u32 {
    1
}

impl ItemSelection {
    pub fn new(selected: bool, variety: u32) -> Self {
        Self {
            selected,
            variety: variety.max(1),
        }
    }

    /// Effective variety multiplier, clamped to a minimum of 1.
    pub fn multiplier(&self) -> u32 {
        self.variety.max(1)
    }
}

impl Default for ItemSelection {
    fn default() -> Self {
        Self {
            selected: false,
            variety: 1,
        }
    }
}

/// Measurement unit, used by the display formatting contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Millilitres,
    #[serde(rename = "pcs")]
    Pieces,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Grams => write!(f, "g"),
            Unit::Millilitres => write!(f, "ml"),
            Unit::Pieces => write!(f, "pcs"),
        }
    }
}
