use rapidfuzz::distance::levenshtein;

use crate::config::LevenshteinSettings;
use crate::context::ComparisonContext;
use crate::error::Result;
use crate::measures::WordSimMeasure;
use crate::utils::{check_threshold, normalize_term};

/// Edit-distance measure for short typos and inflections.
#[derive(Debug, Clone, Copy)]
pub struct LevenshteinMeasure {
    min_length: usize,
    max_distance: usize,
    threshold: f64,
}

impl LevenshteinMeasure {
    pub fn new(min_length: usize, max_distance: usize, threshold: f64) -> Result<Self> {
        Ok(Self {
            min_length,
            max_distance,
            threshold: check_threshold("levenshtein", threshold)?,
        })
    }

    pub fn from_settings(settings: &LevenshteinSettings) -> Result<Self> {
        Self::new(settings.min_length, settings.max_distance, settings.threshold)
    }
}

impl WordSimMeasure for LevenshteinMeasure {
    fn id(&self) -> &'static str {
        "levenshtein"
    }

    fn are_words_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        let first = normalize_term(ctx.first_term());
        let second = normalize_term(ctx.second_term());
        let first_len = first.chars().count();
        let second_len = second.chars().count();
        if first_len.min(second_len) < self.min_length {
            return false;
        }
        let distance = levenshtein::distance(first.chars(), second.chars());
        if distance <= self.max_distance {
            return true;
        }
        let max_len = first_len.max(second_len);
        1.0 - distance as f64 / max_len as f64 >= self.threshold
    }
}
