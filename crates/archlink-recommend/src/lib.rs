//! Confidence-weighted recommendation of model elements from text.
//!
//! Text extraction yields noun mappings that name or type candidate
//! elements. This crate turns them into *recommended instances*: evidence
//! from several claimants is fused into one probability per instance,
//! near-duplicate names are merged through the configured
//! [`TermComparer`](archlink_similarity::TermComparer), and enumerations such
//! as "A, B and C" become relations between the instances they mention.
//!
//! The [`RecommendationGenerator`] is the entry point; it runs the configured
//! [`agents`] over a [`PipelineData`] context.

pub mod agents;
pub mod config;
pub mod confidence;
pub mod error;
pub mod extractors;
pub mod generator;
pub mod instance;
pub mod pipeline_data;
pub mod relation;
pub mod separators;
pub mod shared;
pub mod state;
pub mod utils;

pub use agents::{
    AgentRegistry, InitialRecommendationAgent, RecommendationAgent, SeparatedRelationsAgent,
    default_agent_registry,
};
pub use confidence::{AggregationFunction, Confidence, root_mean_square};
pub use config::{RecommendationConfig, SeparatedRelationsSettings};
pub use error::{RecommendError, Result};
pub use extractors::{
    ExtractorRegistry, NameTypeExtractor, RecommendationExtractor, default_extractor_registry,
};
pub use generator::RecommendationGenerator;
pub use instance::{RecommendedInstance, fuse_probabilities};
pub use pipeline_data::PipelineData;
pub use relation::{InstanceId, RecommendedRelation};
pub use separators::Separators;
pub use shared::SharedRecommendationState;
pub use state::RecommendationState;
