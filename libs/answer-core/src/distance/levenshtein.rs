//! Plain Levenshtein distance (no transpositions).

use super::{check_size, EditDistance};
use crate::error::DistanceError;

#[derive(Debug, Clone, Copy)]
pub struct Levenshtein {
    pub max_cells: usize,
}

impl Levenshtein {
    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }
}

impl EditDistance for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn distance(&self, a: &str, b: &str) -> Result<usize, DistanceError> {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        check_size(self.name(), a_chars.len(), b_chars.len(), self.max_cells)?;
        Ok(levenshtein_chars(&a_chars, &b_chars))
    }
}

fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
