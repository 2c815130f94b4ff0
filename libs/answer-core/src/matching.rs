//! Answer matching for translation exercises.
//!
//! A typed answer is first compared exactly (after normalization) against
//! every accepted answer, then fuzzily with an error budget that grows with
//! the length of the accepted answer.

use crate::distance::{get_metric, EditDistance};
use crate::error::Result;
use crate::normalize::normalize;
use crate::settings::MatchSettings;
use serde::{Deserialize, Serialize};

/// Verdict for a typed answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// The accepted answer that matched, as written in the exercise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_answer: Option<String>,
    /// Whether the match needed at least one edit.
    #[serde(default)]
    pub is_fuzzy: bool,
    /// Typo note shown to the learner on fuzzy matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_feedback: Option<String>,
}

impl MatchResult {
    pub fn incorrect() -> Self {
        Self::default()
    }

    pub fn exact(accepted: &str) -> Self {
        Self {
            is_correct: true,
            matched_answer: Some(accepted.to_string()),
            is_fuzzy: false,
            user_feedback: None,
        }
    }

    /// Fuzzy match; the feedback quotes both strings as originally typed.
    pub fn fuzzy(user_answer: &str, accepted: &str) -> Self {
        Self {
            is_correct: true,
            matched_answer: Some(accepted.to_string()),
            is_fuzzy: true,
            user_feedback: Some(format!(
                "You typed: \"{}\". Correct answer: \"{}\"",
                user_answer, accepted
            )),
        }
    }
}

/// Grades typed answers with a fixed set of settings.
pub struct Matcher {
    settings: MatchSettings,
    metric: Box<dyn EditDistance>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatchSettings::default())
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("settings", &self.settings)
            .field("metric", &self.metric.name())
            .finish()
    }
}

impl Matcher {
    /// Create a matcher without validating settings.
    ///
    /// Non-ascending budget thresholds still grade deterministically; use
    /// [`Matcher::try_new`] for settings that come from user configuration.
    pub fn new(settings: MatchSettings) -> Self {
        let metric = get_metric(settings.metric, settings.max_cells);
        Self { settings, metric }
    }

    /// Create a matcher after validating settings.
    pub fn try_new(settings: MatchSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Grade `user_answer` against `possible_answers`, scanned in order.
    pub fn check<S: AsRef<str>>(&self, user_answer: &str, possible_answers: &[S]) -> MatchResult {
        let user_normalized = normalize(user_answer);
        if user_normalized.is_empty() {
            return MatchResult::incorrect();
        }

        let accepted: Vec<(&str, String)> = possible_answers
            .iter()
            .map(|answer| {
                let raw = answer.as_ref();
                (raw, normalize(raw))
            })
            .collect();

        if let Some((index, (raw, _))) = accepted
            .iter()
            .enumerate()
            .find(|(_, (_, normalized))| *normalized == user_normalized)
        {
            tracing::debug!(index, "exact answer match");
            return MatchResult::exact(raw);
        }

        for (index, (raw, normalized)) in accepted.iter().enumerate() {
            let allowed = self.error_budget(normalized.chars().count());
            if allowed == 0 {
                continue;
            }

            let distance = match self.metric.distance(&user_normalized, normalized) {
                Ok(distance) => distance,
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping accepted answer");
                    continue;
                }
            };

            if distance > 0 && distance <= allowed {
                tracing::debug!(index, distance, allowed, "fuzzy answer match");
                return MatchResult::fuzzy(user_answer, raw);
            }
        }

        MatchResult::incorrect()
    }

    /// Edits tolerated for a normalized accepted answer of `len` chars.
    pub fn error_budget(&self, len: usize) -> usize {
        self.settings.budget.allowed(len)
    }
}

/// Grade `user_answer` with default settings.
pub fn check_answer<S: AsRef<str>>(user_answer: &str, possible_answers: &[S]) -> MatchResult {
    Matcher::default().check(user_answer, possible_answers)
}

/// Default error budget for a normalized accepted answer of `len` chars.
pub fn error_budget(len: usize) -> usize {
    MatchSettings::default().budget.allowed(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use crate::settings::{ErrorBudget, Metric};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_answer_is_incorrect() {
        assert_eq!(check_answer("", &["a"]), MatchResult::incorrect());
        assert_eq!(check_answer("  ", &[""]), MatchResult::incorrect());
        assert!(!check_answer("!.,", &["!"]).is_correct);
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(
            check_answer("HELLO WORLD", &["hello world"]),
            MatchResult::exact("hello world")
        );
    }

    #[test]
    fn test_exact_reports_raw_accepted() {
        let result = check_answer("hello world", &["Hello, World!"]);
        assert_eq!(result.matched_answer.as_deref(), Some("Hello, World!"));
        assert!(!result.is_fuzzy);
        assert_eq!(result.user_feedback, None);
    }

    #[test]
    fn test_exact_beats_earlier_fuzzy() {
        let result = check_answer("cats", &["cat", "cats"]);
        assert_eq!(result, MatchResult::exact("cats"));
    }

    #[test]
    fn test_fuzzy_feedback_quotes_raw_strings() {
        let result = check_answer("Aple!", &["Apple."]);
        assert_eq!(
            result,
            MatchResult {
                is_correct: true,
                matched_answer: Some("Apple.".to_string()),
                is_fuzzy: true,
                user_feedback: Some(
                    "You typed: \"Aple!\". Correct answer: \"Apple.\"".to_string()
                ),
            }
        );
    }

    #[test]
    fn test_empty_accepted_answer_never_matches() {
        assert!(!check_answer("a", &["", "..."]).is_correct);
    }

    #[test]
    fn test_no_candidates() {
        let none: [&str; 0] = [];
        assert_eq!(check_answer("anything", &none), MatchResult::incorrect());
    }

    #[test]
    fn test_accepts_owned_strings() {
        let answers = vec!["the".to_string()];
        assert!(check_answer("teh", &answers).is_fuzzy);
    }

    #[test]
    fn test_default_error_budget() {
        assert_eq!(error_budget(2), 0);
        assert_eq!(error_budget(3), 1);
        assert_eq!(error_budget(7), 1);
        assert_eq!(error_budget(8), 2);
        assert_eq!(error_budget(15), 2);
        assert_eq!(error_budget(16), 3);
    }

    #[test]
    fn test_levenshtein_metric_rejects_swap() {
        let matcher = Matcher::new(MatchSettings {
            metric: Metric::Levenshtein,
            ..MatchSettings::default()
        });
        assert!(!matcher.check("teh", &["the"]).is_correct);
    }

    #[test]
    fn test_oversized_candidate_is_skipped() {
        let matcher = Matcher::new(MatchSettings {
            max_cells: 30,
            ..MatchSettings::default()
        });
        let long = "a much longer accepted answer";
        let result = matcher.check("aple", &[long, "apple"]);
        assert_eq!(result.matched_answer.as_deref(), Some("apple"));
        assert!(result.is_fuzzy);
    }

    #[test]
    fn test_try_new_validates() {
        let settings = MatchSettings {
            budget: ErrorBudget {
                one_error_from: 10,
                two_errors_from: 5,
                three_errors_from: 16,
            },
            ..MatchSettings::default()
        };
        assert!(matches!(
            Matcher::try_new(settings),
            Err(SettingsError::BudgetNotAscending { .. })
        ));
        assert!(Matcher::try_new(MatchSettings::default()).is_ok());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(MatchResult::fuzzy("teh", "the")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isCorrect": true,
                "matchedAnswer": "the",
                "isFuzzy": true,
                "userFeedback": "You typed: \"teh\". Correct answer: \"the\"",
            })
        );

        let json = serde_json::to_value(MatchResult::incorrect()).unwrap();
        assert_eq!(json, serde_json::json!({ "isCorrect": false, "isFuzzy": false }));
    }
}
