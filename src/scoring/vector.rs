use std::collections::BTreeMap;

use crate::text::tokenize;

/// Term-frequency vector of one composed document.
///
/// Built fresh per call. Keys are ordered so iteration, and therefore
/// floating-point summation order, is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermVector {
    counts: BTreeMap<String, u32>,
}

impl TermVector {
    /// Tokenizes `text` and counts every token. No stopword removal.
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for token in tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        TermVector { counts }
    }

    /// Occurrences of `term`; 0 when absent.
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&count| f64::from(count) * f64::from(count))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product. Terms missing from either side count as 0.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .iter()
            .map(|(term, count)| f64::from(count) * f64::from(large.count(term)))
            .sum()
    }
}
