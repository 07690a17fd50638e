//! The assembled comparison substrate used for all identity decisions.

use std::sync::Arc;

use tracing::debug;

use crate::config::SimilarityConfig;
use crate::context::ComparisonContext;
use crate::error::Result;
use crate::measures::WordSimMeasure;
use crate::registry::{
    MeasureRegistry, StrategyRegistry, default_measure_registry, default_strategy_registry,
};
use crate::strategy::{AtLeastOneStrategy, ComparisonStrategy};

/// Configured measures plus the strategy combining them.
///
/// Cheap to clone; measures and strategy are shared.
#[derive(Debug, Clone)]
pub struct TermComparer {
    measures: Vec<Arc<dyn WordSimMeasure>>,
    strategy: Arc<dyn ComparisonStrategy>,
}

impl TermComparer {
    pub fn new(
        measures: Vec<Arc<dyn WordSimMeasure>>,
        strategy: Arc<dyn ComparisonStrategy>,
    ) -> Self {
        Self { measures, strategy }
    }

    /// Resolves the configured ids against the built-in registries.
    pub fn from_config(config: &SimilarityConfig) -> Result<Self> {
        Self::with_registries(
            config,
            default_measure_registry(),
            default_strategy_registry(),
        )
    }

    /// Resolves every configured id up front; the first unknown id is returned
    /// as an error.
    pub fn with_registries(
        config: &SimilarityConfig,
        measures: &MeasureRegistry,
        strategies: &StrategyRegistry,
    ) -> Result<Self> {
        let strategy = strategies.create(&config.strategy)?;
        let measures = config
            .measures
            .iter()
            .map(|id| measures.create(id, config))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            strategy = strategy.id(),
            measures = ?measures.iter().map(|m| m.id()).collect::<Vec<_>>(),
            "term comparer configured"
        );
        Ok(Self::new(measures, strategy))
    }

    pub fn measure_ids(&self) -> Vec<&'static str> {
        self.measures.iter().map(|measure| measure.id()).collect()
    }

    pub fn strategy_id(&self) -> &'static str {
        self.strategy.id()
    }

    pub fn are_words_similar(&self, first: &str, second: &str) -> bool {
        self.are_similar(&ComparisonContext::new(first, second))
    }

    pub fn are_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        self.strategy.are_words_similar(ctx, &self.measures)
    }
}

impl Default for TermComparer {
    /// Equality only, combined with the at-least-one strategy.
    fn default() -> Self {
        Self::new(
            vec![Arc::new(crate::measures::EqualityMeasure)],
            Arc::new(AtLeastOneStrategy),
        )
    }
}
