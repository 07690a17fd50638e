use rapidfuzz::distance::jaro_winkler;

use crate::config::JaroWinklerSettings;
use crate::context::ComparisonContext;
use crate::error::Result;
use crate::measures::WordSimMeasure;
use crate::utils::{check_threshold, normalize_term};

/// Jaro-Winkler similarity on normalized terms, compared against a threshold.
#[derive(Debug, Clone, Copy)]
pub struct JaroWinklerMeasure {
    threshold: f64,
}

impl JaroWinklerMeasure {
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: check_threshold("jaro_winkler", threshold)?,
        })
    }

    pub fn from_settings(settings: &JaroWinklerSettings) -> Result<Self> {
        Self::new(settings.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Raw Jaro-Winkler similarity of the normalized terms.
    pub fn similarity(first: &str, second: &str) -> f64 {
        let first = normalize_term(first);
        let second = normalize_term(second);
        jaro_winkler::similarity(first.chars(), second.chars())
    }
}

impl WordSimMeasure for JaroWinklerMeasure {
    fn id(&self) -> &'static str {
        "jaro_winkler"
    }

    fn are_words_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        Self::similarity(ctx.first_term(), ctx.second_term()) >= self.threshold
    }
}
