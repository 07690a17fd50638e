//! Recommendation agents: the steps of the recommendation stage.

mod initial;
mod separated_relations;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::config::RecommendationConfig;
use crate::error::{RecommendError, Result};
use crate::pipeline_data::PipelineData;

pub use initial::InitialRecommendationAgent;
pub use separated_relations::SeparatedRelationsAgent;

pub trait RecommendationAgent: Send + Sync + fmt::Debug {
    fn id(&self) -> &'static str;

    fn execute(&self, data: &mut PipelineData) -> Result<()>;
}

pub type AgentFactory = fn(&RecommendationConfig) -> Result<Box<dyn RecommendationAgent>>;

#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    factories: BTreeMap<&'static str, AgentFactory>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &'static str, factory: AgentFactory) {
        self.factories.insert(id, factory);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn create(
        &self,
        id: &str,
        config: &RecommendationConfig,
    ) -> Result<Box<dyn RecommendationAgent>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| RecommendError::UnknownAgent {
                name: id.to_string(),
            })?;
        factory(config)
    }
}

static DEFAULT_AGENTS: OnceLock<AgentRegistry> = OnceLock::new();

pub fn default_agent_registry() -> &'static AgentRegistry {
    DEFAULT_AGENTS.get_or_init(|| {
        let mut registry = AgentRegistry::new();
        registry.register(InitialRecommendationAgent::ID, |config| {
            Ok(Box::new(InitialRecommendationAgent::from_config(config)?))
        });
        registry.register(SeparatedRelationsAgent::ID, |config| {
            Ok(Box::new(SeparatedRelationsAgent::from_config(config)?))
        });
        registry
    })
}
