use std::sync::Arc;

use tracing::debug;

use crate::agents::RecommendationAgent;
use crate::config::RecommendationConfig;
use crate::error::Result;
use crate::extractors::{RecommendationExtractor, default_extractor_registry};
use crate::pipeline_data::PipelineData;

/// Runs the enabled extractors over every word of the text.
#[derive(Debug)]
pub struct InitialRecommendationAgent {
    extractors: Vec<Box<dyn RecommendationExtractor>>,
}

impl InitialRecommendationAgent {
    pub const ID: &'static str = "initial_recommendation";

    pub fn new(extractors: Vec<Box<dyn RecommendationExtractor>>) -> Self {
        Self { extractors }
    }

    /// Resolves every configured extractor id; an unknown id is an error.
    pub fn from_config(config: &RecommendationConfig) -> Result<Self> {
        let registry = default_extractor_registry();
        let extractors = config
            .extractors
            .iter()
            .map(|id| registry.create(id, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(extractors))
    }

    pub fn extractor_ids(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|extractor| extractor.id()).collect()
    }
}

impl RecommendationAgent for InitialRecommendationAgent {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn execute(&self, data: &mut PipelineData) -> Result<()> {
        let text = Arc::clone(data.text()?);
        let text_state = Arc::clone(data.text_state()?);
        let state = data.recommendation_state_mut()?;
        for word in text.words() {
            for extractor in &self.extractors {
                extractor.exec(word, &text, &text_state, state);
            }
        }
        debug!(instances = state.len(), "initial recommendation done");
        Ok(())
    }
}
