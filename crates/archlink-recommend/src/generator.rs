use archlink_model::{Text, TextState};
use archlink_similarity::{SimilarityConfig, TermComparer};
use tracing::{info, info_span};

use crate::agents::{RecommendationAgent, default_agent_registry};
use crate::config::RecommendationConfig;
use crate::error::{RecommendError, Result};
use crate::pipeline_data::PipelineData;
use crate::state::RecommendationState;

/// The recommendation stage: the enabled agents, resolved once, run in
/// configuration order against a fresh [`RecommendationState`].
#[derive(Debug)]
pub struct RecommendationGenerator {
    comparer: TermComparer,
    bias_weight: i32,
    agents: Vec<Box<dyn RecommendationAgent>>,
}

impl RecommendationGenerator {
    /// Resolves the comparer and every configured agent; unknown ids and
    /// malformed probabilities fail here, before any document is processed.
    pub fn from_config(
        similarity: &SimilarityConfig,
        config: &RecommendationConfig,
    ) -> Result<Self> {
        let comparer = TermComparer::from_config(similarity)?;
        let registry = default_agent_registry();
        let agents = config
            .agents
            .iter()
            .map(|id| registry.create(id, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            comparer,
            bias_weight: config.bias_weight,
            agents,
        })
    }

    pub fn agent_ids(&self) -> Vec<&'static str> {
        self.agents.iter().map(|agent| agent.id()).collect()
    }

    pub fn comparer(&self) -> &TermComparer {
        &self.comparer
    }

    /// Seeds `data` with an empty recommendation state and runs every agent.
    ///
    /// A state already present in `data` is kept and extended.
    pub fn execute(&self, data: &mut PipelineData) -> Result<()> {
        let state =
            RecommendationState::new(self.comparer.clone()).with_bias_weight(self.bias_weight);
        data.extend_recommendation_state(state);
        for agent in &self.agents {
            let span = info_span!("agent", id = agent.id());
            let _guard = span.enter();
            agent.execute(data)?;
        }
        let state = data.recommendation_state()?;
        info!(
            instances = state.len(),
            relations = state.relations().len(),
            "recommendation finished"
        );
        Ok(())
    }

    /// Runs the stage over one document and returns the resulting state.
    pub fn run(&self, text: Text, text_state: TextState) -> Result<RecommendationState> {
        let mut data = PipelineData::new(text, text_state);
        self.execute(&mut data)?;
        data.take_recommendation_state()
            .ok_or(RecommendError::MissingInput("recommendation_state"))
    }
}
