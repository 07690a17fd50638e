//! Term-similarity measures.
//!
//! Each measure answers one question: do two terms denote the same concept?
//! Measures are pure; any telemetry about a comparison is emitted by the
//! strategy that combines them.

mod dictionary;
mod equality;
mod jaro_winkler;
mod levenshtein;
mod ngram;

use std::fmt;

pub use dictionary::{DictionaryMeasure, LexicalResource, SynonymDictionary};
pub use equality::EqualityMeasure;
pub use jaro_winkler::JaroWinklerMeasure;
pub use levenshtein::LevenshteinMeasure;
pub use ngram::NgramMeasure;

use crate::context::ComparisonContext;

/// A single similarity decision procedure.
pub trait WordSimMeasure: Send + Sync + fmt::Debug {
    /// Registry id of the measure (e.g. "jaro_winkler").
    fn id(&self) -> &'static str;

    /// Whether the two terms of `ctx` are similar under this measure.
    fn are_words_similar(&self, ctx: &ComparisonContext<'_>) -> bool;
}
