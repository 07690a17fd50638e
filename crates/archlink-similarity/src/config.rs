//! Configuration for the comparison substrate.
//!
//! Every field has a default, so an empty `[similarity]` table yields the
//! equality + Jaro-Winkler setup combined with the at-least-one strategy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Ids of the enabled measures, evaluated in this order.
    pub measures: Vec<String>,
    /// Id of the strategy combining the measure verdicts.
    pub strategy: String,
    pub jaro_winkler: JaroWinklerSettings,
    pub ngram: NgramSettings,
    pub levenshtein: LevenshteinSettings,
    pub dictionary: DictionarySettings,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            measures: vec!["equality".to_string(), "jaro_winkler".to_string()],
            strategy: "at_least_one".to_string(),
            jaro_winkler: JaroWinklerSettings::default(),
            ngram: NgramSettings::default(),
            levenshtein: LevenshteinSettings::default(),
            dictionary: DictionarySettings::default(),
        }
    }
}

impl SimilarityConfig {
    pub fn with_measures<I, S>(mut self, measures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.measures = measures.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerSettings {
    /// Minimum Jaro-Winkler similarity for two terms to count as similar.
    pub threshold: f64,
}

impl Default for JaroWinklerSettings {
    fn default() -> Self {
        Self { threshold: 0.85 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NgramSettings {
    /// Gram length in characters.
    pub n: usize,
    /// Minimum Dice overlap of the gram multisets.
    pub threshold: f64,
}

impl Default for NgramSettings {
    fn default() -> Self {
        Self {
            n: 2,
            threshold: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevenshteinSettings {
    /// Terms shorter than this are never similar under this measure.
    pub min_length: usize,
    /// Edit distance up to which terms are similar regardless of length.
    pub max_distance: usize,
    /// Minimum normalized similarity `1 - distance / max_len`.
    pub threshold: f64,
}

impl Default for LevenshteinSettings {
    fn default() -> Self {
        Self {
            min_length: 2,
            max_distance: 1,
            threshold: 0.9,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionarySettings {
    /// Groups of terms that denote the same concept.
    pub synonyms: Vec<Vec<String>>,
}
