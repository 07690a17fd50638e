//! Extractors propose recommended instances from the mappings around a word.
//!
//! The `initial_recommendation` agent runs every enabled extractor once per
//! word of the text. Extractors are resolved by id through an
//! [`ExtractorRegistry`], built once at startup.

mod name_type;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use archlink_model::{Occurrence, Text, TextState};

use crate::config::RecommendationConfig;
use crate::error::{RecommendError, Result};
use crate::state::RecommendationState;

pub use name_type::NameTypeExtractor;

pub trait RecommendationExtractor: Send + Sync + fmt::Debug {
    fn id(&self) -> &'static str;

    /// Replaces the extractor's probabilities; the arity is component specific.
    fn set_probabilities(&mut self, probabilities: &[f64]) -> Result<()>;

    fn exec(
        &self,
        word: &Occurrence,
        text: &Text,
        text_state: &TextState,
        state: &mut RecommendationState,
    );
}

pub type ExtractorFactory = fn(&RecommendationConfig) -> Result<Box<dyn RecommendationExtractor>>;

#[derive(Debug, Clone, Default)]
pub struct ExtractorRegistry {
    factories: BTreeMap<&'static str, ExtractorFactory>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &'static str, factory: ExtractorFactory) {
        self.factories.insert(id, factory);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Builds the extractor and applies any probability override configured
    /// under its id.
    pub fn create(
        &self,
        id: &str,
        config: &RecommendationConfig,
    ) -> Result<Box<dyn RecommendationExtractor>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| RecommendError::UnknownExtractor {
                name: id.to_string(),
            })?;
        let mut extractor = factory(config)?;
        if let Some(probabilities) = config.probabilities_for(id) {
            extractor.set_probabilities(probabilities)?;
        }
        Ok(extractor)
    }
}

static DEFAULT_EXTRACTORS: OnceLock<ExtractorRegistry> = OnceLock::new();

pub fn default_extractor_registry() -> &'static ExtractorRegistry {
    DEFAULT_EXTRACTORS.get_or_init(|| {
        let mut registry = ExtractorRegistry::new();
        registry.register(NameTypeExtractor::ID, |_| {
            Ok(Box::new(NameTypeExtractor::default()))
        });
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extractor_fails() {
        let error = default_extractor_registry()
            .create("pos_tagger", &RecommendationConfig::default())
            .unwrap_err();
        assert!(matches!(error, RecommendError::UnknownExtractor { name } if name == "pos_tagger"));
    }

    #[test]
    fn probability_override_is_validated() {
        let mut config = RecommendationConfig::default();
        config
            .probabilities
            .insert("name_type".to_string(), vec![0.5, 0.7]);
        let error = default_extractor_registry()
            .create("name_type", &config)
            .unwrap_err();
        assert!(
            matches!(&error, RecommendError::InvalidProbabilities { component, .. } if component == "name_type"),
            "unexpected error: {error}"
        );
    }
}
