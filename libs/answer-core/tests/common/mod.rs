//! Shared fixtures for grading tests.

/// A 29-char exercise sentence.
pub const SENTENCE: &str = "I am going to the store today";

/// `SENTENCE` with one substituted letter in each of three words.
pub const SENTENCE_THREE_TYPOS: &str = "I am goinf to the stire todsy";

/// Accepted answers for a Japanese-to-English exercise, preferred first.
pub fn soldier_answers() -> Vec<String> {
    vec![
        "I am not a soldier.".to_string(),
        "I'm not a soldier.".to_string(),
        "I am no soldier.".to_string(),
    ]
}
