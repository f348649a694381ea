//! Requirement calculation engine for catering orders.
//!
//! Pure and synchronous: given a guest count, a category's menu items, the
//! per-item selections and the fixed equipment ratio table, derives the
//! aggregate raw-ingredient quantities and equipment counts for an event.
//! No I/O, no shared state; safe to call repeatedly and from any number of
//! sessions at once.

pub mod calculator;
pub mod error;
pub mod format;
pub mod types;

pub use calculator::{calculate, Calculations};
pub use error::{CalcError, Result};
pub use format::format_quantity;
pub use types::*;
