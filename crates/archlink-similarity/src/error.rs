#![deny(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("unknown similarity measure: {name}")]
    UnknownMeasure { name: String },

    #[error("unknown comparison strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("{component}: {message}")]
    InvalidParameter {
        component: &'static str,
        message: String,
    },
}

impl SimilarityError {
    pub(crate) fn invalid(component: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            component,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
