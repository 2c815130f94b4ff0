//! Answer grading for free-text translation exercises.
//!
//! Provides:
//! - Normalization (case folding, fixed punctuation denylist, trimming)
//! - Edit-distance metrics (Damerau-Levenshtein, Levenshtein)
//! - Exact-then-fuzzy matching with a length-scaled error budget
//! - Matcher settings (metric, budget thresholds, size limit)

pub mod distance;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod settings;

pub use distance::{get_metric, EditDistance};
pub use error::{DistanceError, Result, SettingsError};
pub use matching::{check_answer, error_budget, MatchResult, Matcher};
pub use normalize::normalize;
pub use settings::{ErrorBudget, MatchSettings, Metric};
