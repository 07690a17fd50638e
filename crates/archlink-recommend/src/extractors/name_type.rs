use std::sync::Arc;

use archlink_model::{Claimant, MappingKind, Occurrence, Text, TextState};
use tracing::trace;

use crate::error::{Result, single_probability};
use crate::extractors::RecommendationExtractor;
use crate::state::RecommendationState;

/// Recommends an instance wherever a name mapping stands directly next to a
/// type mapping, as in "the Database component" or "component Database".
#[derive(Debug, Clone, PartialEq)]
pub struct NameTypeExtractor {
    probability: f64,
}

impl NameTypeExtractor {
    pub const ID: &'static str = "name_type";

    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for NameTypeExtractor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RecommendationExtractor for NameTypeExtractor {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn set_probabilities(&mut self, probabilities: &[f64]) -> Result<()> {
        self.probability = single_probability(Self::ID, probabilities)?;
        Ok(())
    }

    fn exec(
        &self,
        word: &Occurrence,
        text: &Text,
        text_state: &TextState,
        state: &mut RecommendationState,
    ) {
        let neighbours = [text.next_word(word.position), text.pre_word(word.position)];
        for name in text_state.mappings_by_word_and_kind(word.position, MappingKind::Name) {
            for neighbour in neighbours.iter().flatten() {
                for type_ in
                    text_state.mappings_by_word_and_kind(neighbour.position, MappingKind::Type)
                {
                    trace!(
                        word = %word.text,
                        name = %name.reference,
                        type_name = %type_.reference,
                        "name next to type"
                    );
                    state.add_recommended_instance(
                        &name.reference,
                        &type_.reference,
                        Claimant::component(Self::ID),
                        self.probability,
                        &[Arc::clone(name)],
                        &[Arc::clone(type_)],
                    );
                }
            }
        }
    }
}
