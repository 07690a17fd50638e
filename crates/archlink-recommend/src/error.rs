#![deny(unsafe_code)]

use archlink_model::ModelError;
use archlink_similarity::SimilarityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("unknown recommendation agent: {name}")]
    UnknownAgent { name: String },

    #[error("unknown recommendation extractor: {name}")]
    UnknownExtractor { name: String },

    #[error("{component}: {message}")]
    InvalidProbabilities { component: String, message: String },

    #[error("pipeline input not available: {0}")]
    MissingInput(&'static str),

    #[error("recommendation state lock poisoned")]
    StatePoisoned,

    #[error(transparent)]
    Similarity(#[from] SimilarityError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl RecommendError {
    pub(crate) fn probabilities(component: &str, message: impl Into<String>) -> Self {
        Self::InvalidProbabilities {
            component: component.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;

/// Validates a configured probability list for a component taking exactly one value.
pub fn single_probability(component: &str, probabilities: &[f64]) -> Result<f64> {
    match probabilities {
        [] => Err(RecommendError::probabilities(
            component,
            "the given probabilities are empty",
        )),
        [value] if (0.0..=1.0).contains(value) => Ok(*value),
        [value] => Err(RecommendError::probabilities(
            component,
            format!("probability {value} must lie in [0, 1]"),
        )),
        _ => Err(RecommendError::probabilities(
            component,
            format!(
                "the given probabilities are more than needed (expected 1, got {})",
                probabilities.len()
            ),
        )),
    }
}
