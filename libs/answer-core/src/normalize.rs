//! Normalization applied to both the learner's answer and accepted answers.
//!
//! Only a fixed ASCII denylist is stripped. Full-width punctuation such as
//! `。` and `、`, quotes, `?` and apostrophes are kept, and no Unicode
//! canonical normalization is applied.

/// Characters removed before comparison.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Whether `c` is removed by [`normalize`].
pub fn is_stripped(c: char) -> bool {
    STRIPPED_PUNCTUATION.contains(&c)
}

/// Lowercase, strip denylisted punctuation, then trim.
///
/// Trimming runs last so that `normalize` is idempotent: `"a ."` becomes
/// `"a"` in one pass.
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .to_lowercase()
        .chars()
        .filter(|&c| !is_stripped(c))
        .collect();

    stripped.trim().to_string()
}
