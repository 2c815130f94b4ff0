//! Error types for answer-core.

use thiserror::Error;

/// Result type alias using SettingsError.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while validating matcher settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("error budget thresholds must be strictly ascending: {one} < {two} < {three}")]
    BudgetNotAscending { one: usize, two: usize, three: usize },

    #[error("max_cells must be greater than zero")]
    ZeroCellLimit,
}

/// Errors from an edit-distance computation.
///
/// These never reach the caller of the matcher; a failing candidate is
/// graded as non-matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistanceError {
    #[error("input too large for {metric}: {len_a} x {len_b} cells exceeds limit {max_cells}")]
    InputTooLarge {
        metric: &'static str,
        len_a: usize,
        len_b: usize,
        max_cells: usize,
    },
}
