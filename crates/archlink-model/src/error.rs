#![deny(unsafe_code)]

use thiserror::Error;

use crate::ids::MappingId;
use crate::mapping::MappingKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("duplicate word position {0}")]
    DuplicatePosition(usize),

    #[error("duplicate noun mapping id {0}")]
    DuplicateMappingId(MappingId),

    #[error("noun mapping {mapping} references unknown word position {position}")]
    UnknownWord { mapping: MappingId, position: usize },

    #[error("noun mapping {mapping} has {kind} confidence {value} outside [0, 1]")]
    InvalidConfidence {
        mapping: MappingId,
        kind: MappingKind,
        value: f64,
    },

    #[error("invalid claimant: {0:?}")]
    InvalidClaimant(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
