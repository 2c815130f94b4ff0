//! Matcher configuration.

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};

/// Edit-distance metric used by the fuzzy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Counts adjacent transpositions as a single edit.
    DamerauLevenshtein,
    Levenshtein,
}

impl Default for Metric {
    fn default() -> Self {
        Self::DamerauLevenshtein
    }
}

impl Metric {
    /// Get the metric name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DamerauLevenshtein => "damerau_levenshtein",
            Self::Levenshtein => "levenshtein",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "damerau_levenshtein" => Some(Self::DamerauLevenshtein),
            "levenshtein" => Some(Self::Levenshtein),
            _ => None,
        }
    }
}

/// Length thresholds at which the tolerated error count steps up.
///
/// Lengths are counted in chars of the normalized accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBudget {
    pub one_error_from: usize,
    pub two_errors_from: usize,
    pub three_errors_from: usize,
}

impl Default for ErrorBudget {
    fn default() -> Self {
        Self {
            one_error_from: 3,
            two_errors_from: 8,
            three_errors_from: 16,
        }
    }
}

impl ErrorBudget {
    /// Number of edits tolerated for an accepted answer of `len` chars.
    pub fn allowed(&self, len: usize) -> usize {
        if len >= self.three_errors_from {
            3
        } else if len >= self.two_errors_from {
            2
        } else if len >= self.one_error_from {
            1
        } else {
            0
        }
    }

    fn validate(&self) -> Result<()> {
        if self.one_error_from < self.two_errors_from
            && self.two_errors_from < self.three_errors_from
        {
            Ok(())
        } else {
            Err(SettingsError::BudgetNotAscending {
                one: self.one_error_from,
                two: self.two_errors_from,
                three: self.three_errors_from,
            })
        }
    }
}

/// Settings for a [`Matcher`](crate::matching::Matcher).
///
/// Every field is optional when deserializing; missing fields take the
/// defaults the grading UI has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub metric: Metric,
    pub budget: ErrorBudget,
    /// Upper bound on DP cells (user chars x accepted chars) per candidate.
    pub max_cells: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            budget: ErrorBudget::default(),
            max_cells: 1_000_000,
        }
    }
}

impl MatchSettings {
    /// Check that the budget thresholds ascend and the cell limit is usable.
    pub fn validate(&self) -> Result<()> {
        self.budget.validate()?;
        if self.max_cells == 0 {
            return Err(SettingsError::ZeroCellLimit);
        }
        Ok(())
    }
}
