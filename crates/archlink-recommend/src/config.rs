use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::separators::DEFAULT_SEPARATORS;

/// Settings of the recommendation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Agent ids, executed in this order.
    pub agents: Vec<String>,
    /// Extractor ids run by the `initial_recommendation` agent.
    pub extractors: Vec<String>,
    /// Bias applied when fusing an instance's probability.
    pub bias_weight: i32,
    /// Probability overrides keyed by component id.
    pub probabilities: BTreeMap<String, Vec<f64>>,
    pub separated_relations: SeparatedRelationsSettings,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            agents: vec![
                "initial_recommendation".to_string(),
                "separated_relations".to_string(),
            ],
            extractors: vec!["name_type".to_string()],
            bias_weight: 0,
            probabilities: BTreeMap::new(),
            separated_relations: SeparatedRelationsSettings::default(),
        }
    }
}

impl RecommendationConfig {
    /// Configured probability override for a component, if any.
    pub fn probabilities_for(&self, component: &str) -> Option<&[f64]> {
        self.probabilities.get(component).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatedRelationsSettings {
    /// Probability assigned to every relation found in an enumeration.
    pub probability: f64,
    /// Kind label of the emitted relations.
    pub label: String,
    pub separators: Vec<String>,
}

impl Default for SeparatedRelationsSettings {
    fn default() -> Self {
        Self {
            probability: 1.0,
            label: "separated".to_string(),
            separators: DEFAULT_SEPARATORS.into_iter().map(String::from).collect(),
        }
    }
}
