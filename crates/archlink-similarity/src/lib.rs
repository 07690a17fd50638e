//! Fuzzy term comparison.
//!
//! A [`TermComparer`] decides whether two terms denote the same concept by
//! combining a configured list of [`WordSimMeasure`]s with a
//! [`ComparisonStrategy`]. Measures and strategies are selected by id from
//! the registries in [`registry`].

pub mod comparer;
pub mod config;
pub mod context;
pub mod error;
pub mod measures;
pub mod registry;
pub mod strategy;
pub mod utils;

pub use comparer::TermComparer;
pub use config::SimilarityConfig;
pub use context::ComparisonContext;
pub use error::{Result, SimilarityError};
pub use measures::{LexicalResource, WordSimMeasure};
pub use strategy::{AtLeastOneStrategy, ComparisonStrategy, ConsensusStrategy, MajorityStrategy};
