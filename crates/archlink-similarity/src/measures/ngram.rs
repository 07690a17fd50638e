use std::collections::BTreeMap;

use crate::config::NgramSettings;
use crate::context::ComparisonContext;
use crate::error::{Result, SimilarityError};
use crate::measures::WordSimMeasure;
use crate::utils::{check_threshold, squash_term};

/// Character n-gram overlap (Sørensen-Dice over gram multisets).
#[derive(Debug, Clone, Copy)]
pub struct NgramMeasure {
    n: usize,
    threshold: f64,
}

impl NgramMeasure {
    pub fn new(n: usize, threshold: f64) -> Result<Self> {
        if n == 0 {
            return Err(SimilarityError::invalid("ngram", "gram length must be positive"));
        }
        Ok(Self {
            n,
            threshold: check_threshold("ngram", threshold)?,
        })
    }

    pub fn from_settings(settings: &NgramSettings) -> Result<Self> {
        Self::new(settings.n, settings.threshold)
    }

    /// Dice coefficient of the n-gram multisets of the normalized terms.
    ///
    /// Terms shorter than `n` have no grams and only match when equal.
    pub fn overlap(&self, first: &str, second: &str) -> f64 {
        let first = squash_term(first);
        let second = squash_term(second);
        let first_grams = grams(&first, self.n);
        let second_grams = grams(&second, self.n);
        let first_total: usize = first_grams.values().sum();
        let second_total: usize = second_grams.values().sum();
        if first_total == 0 || second_total == 0 {
            return if first == second { 1.0 } else { 0.0 };
        }
        let shared: usize = first_grams
            .iter()
            .map(|(gram, count)| second_grams.get(gram).map_or(0, |other| (*count).min(*other)))
            .sum();
        (2 * shared) as f64 / (first_total + second_total) as f64
    }
}

fn grams(term: &str, n: usize) -> BTreeMap<String, usize> {
    let chars: Vec<char> = term.chars().collect();
    let mut counts = BTreeMap::new();
    for window in chars.windows(n) {
        *counts.entry(window.iter().collect::<String>()).or_insert(0) += 1;
    }
    counts
}

impl WordSimMeasure for NgramMeasure {
    fn id(&self) -> &'static str {
        "ngram"
    }

    fn are_words_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        self.overlap(ctx.first_term(), ctx.second_term()) >= self.threshold
    }
}
