//! Calculator error types

use thiserror::Error;

/// Validation failures raised before any computation runs.
///
/// All variants are recoverable: nothing is produced on error, the caller
/// keeps its previous results and may retry with corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Guest count missing, zero or negative
    #[error("guest count must be a positive number, got {0}")]
    InvalidGuestCount(i64),

    /// No menu item was selected
    #[error("select at least one item")]
    EmptySelection,
}

/// Calculator result type
pub type Result<T> = std::result::Result<T, CalcError>;
