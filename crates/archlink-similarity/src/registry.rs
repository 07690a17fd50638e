//! Name-keyed registries for measures and strategies.
//!
//! Configuration refers to measures and strategies by id. The registries map
//! each id to a factory; they are populated once at startup and every
//! configured id is resolved eagerly, so an unknown id fails before any
//! comparison runs.
//!
//! # Example
//!
//! ```ignore
//! use archlink_similarity::registry::default_measure_registry;
//!
//! let measure = default_measure_registry().create("jaro_winkler", &config)?;
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::config::SimilarityConfig;
use crate::error::{Result, SimilarityError};
use crate::measures::{
    DictionaryMeasure, EqualityMeasure, JaroWinklerMeasure, LevenshteinMeasure, NgramMeasure,
    SynonymDictionary, WordSimMeasure,
};
use crate::strategy::{AtLeastOneStrategy, ComparisonStrategy, ConsensusStrategy, MajorityStrategy};

/// Builds a measure from the settings it reads out of the configuration.
pub type MeasureFactory = fn(&SimilarityConfig) -> Result<Arc<dyn WordSimMeasure>>;

pub type StrategyFactory = fn() -> Arc<dyn ComparisonStrategy>;

#[derive(Debug, Clone, Default)]
pub struct MeasureRegistry {
    factories: BTreeMap<&'static str, MeasureFactory>,
}

impl MeasureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory; a factory already registered under `id` is replaced.
    pub fn register(&mut self, id: &'static str, factory: MeasureFactory) {
        self.factories.insert(id, factory);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered ids in lexical order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn create(&self, id: &str, config: &SimilarityConfig) -> Result<Arc<dyn WordSimMeasure>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| SimilarityError::UnknownMeasure {
                name: id.to_string(),
            })?;
        factory(config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    factories: BTreeMap<&'static str, StrategyFactory>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &'static str, factory: StrategyFactory) {
        self.factories.insert(id, factory);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn create(&self, id: &str) -> Result<Arc<dyn ComparisonStrategy>> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| SimilarityError::UnknownStrategy {
                name: id.to_string(),
            })
    }
}

static DEFAULT_MEASURES: OnceLock<MeasureRegistry> = OnceLock::new();
static DEFAULT_STRATEGIES: OnceLock<StrategyRegistry> = OnceLock::new();

/// Registry with every built-in measure.
pub fn default_measure_registry() -> &'static MeasureRegistry {
    DEFAULT_MEASURES.get_or_init(build_default_measure_registry)
}

/// Registry with every built-in strategy.
pub fn default_strategy_registry() -> &'static StrategyRegistry {
    DEFAULT_STRATEGIES.get_or_init(build_default_strategy_registry)
}

pub fn build_default_measure_registry() -> MeasureRegistry {
    let mut registry = MeasureRegistry::new();
    registry.register("equality", |_| Ok(Arc::new(EqualityMeasure)));
    registry.register("jaro_winkler", |config| {
        Ok(Arc::new(JaroWinklerMeasure::from_settings(&config.jaro_winkler)?))
    });
    registry.register("ngram", |config| {
        Ok(Arc::new(NgramMeasure::from_settings(&config.ngram)?))
    });
    registry.register("levenshtein", |config| {
        Ok(Arc::new(LevenshteinMeasure::from_settings(&config.levenshtein)?))
    });
    registry.register("dictionary", |config| {
        let dictionary = SynonymDictionary::from_settings(&config.dictionary);
        Ok(Arc::new(DictionaryMeasure::new(Arc::new(dictionary))))
    });
    registry
}

pub fn build_default_strategy_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    registry.register("at_least_one", || Arc::new(AtLeastOneStrategy));
    registry.register("majority", || Arc::new(MajorityStrategy));
    registry.register("consensus", || Arc::new(ConsensusStrategy));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registries_list_builtins() {
        let measures: Vec<_> = default_measure_registry().ids().collect();
        assert_eq!(
            measures,
            vec!["dictionary", "equality", "jaro_winkler", "levenshtein", "ngram"]
        );
        let strategies: Vec<_> = default_strategy_registry().ids().collect();
        assert_eq!(strategies, vec!["at_least_one", "consensus", "majority"]);
    }

    #[test]
    fn created_measure_reports_its_id() {
        let config = SimilarityConfig::default();
        for id in default_measure_registry().ids() {
            let measure = default_measure_registry().create(id, &config).unwrap();
            assert_eq!(measure.id(), id);
        }
    }

    #[test]
    fn unknown_ids_are_errors() {
        let config = SimilarityConfig::default();
        assert_eq!(
            default_measure_registry()
                .create("soundex", &config)
                .unwrap_err(),
            SimilarityError::UnknownMeasure {
                name: "soundex".to_string()
            }
        );
        assert!(matches!(
            default_strategy_registry().create("weighted"),
            Err(SimilarityError::UnknownStrategy { .. })
        ));
    }
}
