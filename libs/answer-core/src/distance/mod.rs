//! Edit-distance metrics for the fuzzy pass.
//!
//! Distances are computed over chars, so a kana or kanji counts as one unit
//! just like a Latin letter.

pub mod damerau;
pub mod levenshtein;

use crate::error::DistanceError;
use crate::settings::Metric;

/// Trait for edit-distance metrics.
pub trait EditDistance: Send + Sync {
    /// Metric identifier.
    fn name(&self) -> &'static str;

    /// Minimum number of edits turning `a` into `b`.
    fn distance(&self, a: &str, b: &str) -> Result<usize, DistanceError>;
}

/// Get metric implementation, refusing tables larger than `max_cells`.
pub fn get_metric(metric: Metric, max_cells: usize) -> Box<dyn EditDistance> {
    match metric {
        Metric::DamerauLevenshtein => Box::new(damerau::DamerauLevenshtein::new(max_cells)),
        Metric::Levenshtein => Box::new(levenshtein::Levenshtein::new(max_cells)),
    }
}

/// Reject inputs whose DP table would exceed `max_cells`.
fn check_size(
    metric: &'static str,
    len_a: usize,
    len_b: usize,
    max_cells: usize,
) -> Result<(), DistanceError> {
    if len_a.saturating_mul(len_b) > max_cells {
        return Err(DistanceError::InputTooLarge {
            metric,
            len_a,
            len_b,
            max_cells,
        });
    }
    Ok(())
}
