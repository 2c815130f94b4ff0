//! Damerau-Levenshtein distance, restricted (optimal string alignment) form.
//!
//! Adjacent transpositions cost one edit, so `teh` is one edit from `the`.
//! A substring is never edited twice, which means `ca` to `abc` costs 3
//! rather than the unrestricted 2. Accepted answers are short sentences, so
//! the difference does not show up in grading.

use super::{check_size, EditDistance};
use crate::error::DistanceError;

#[derive(Debug, Clone, Copy)]
pub struct DamerauLevenshtein {
    pub max_cells: usize,
}

impl DamerauLevenshtein {
    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }
}

impl EditDistance for DamerauLevenshtein {
    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }

    fn distance(&self, a: &str, b: &str) -> Result<usize, DistanceError> {
        if a == b {
            return Ok(0);
        }

        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        check_size(self.name(), a_chars.len(), b_chars.len(), self.max_cells)?;
        Ok(osa_chars(&a_chars, &b_chars))
    }
}

fn osa_chars(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Three rows: the transposition step looks two rows back
    let mut prev2 = vec![0; n + 1];
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr[j] = curr[j].min(prev2[j - 2] + 1); // transposition
            }
        }

        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
