//! Engine configuration loaded from TOML.
//!
//! ```toml
//! [similarity]
//! measures = ["equality", "jaro_winkler"]
//! strategy = "at_least_one"
//!
//! [similarity.jaro_winkler]
//! threshold = 0.85
//!
//! [recommendation]
//! agents = ["initial_recommendation", "separated_relations"]
//! extractors = ["name_type"]
//!
//! [recommendation.probabilities]
//! name_type = [1.0]
//!
//! [recommendation.separated_relations]
//! probability = 1.0
//! separators = [",", ";", "and", "or"]
//! ```
//!
//! Every table and field is optional. Names of measures, strategies, agents
//! and extractors are only resolved when the engine is built.

mod error;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use archlink_recommend::{RecommendationConfig, SeparatedRelationsAgent};
use archlink_similarity::SimilarityConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "archlink.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchlinkConfig {
    pub similarity: SimilarityConfig,
    pub recommendation: RecommendationConfig,
}

impl ArchlinkConfig {
    /// Loads and validates the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] from `dir` if it
    /// exists, else the built-in defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        debug!("no config file found; using defaults");
        Ok(Self::default())
    }

    /// Checks constraints that do not depend on the component registries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        reject_duplicates("similarity.measures", &self.similarity.measures)?;
        reject_duplicates("recommendation.agents", &self.recommendation.agents)?;
        reject_duplicates("recommendation.extractors", &self.recommendation.extractors)?;

        let relations = &self.recommendation.separated_relations;
        let relations_enabled = self
            .recommendation
            .agents
            .iter()
            .any(|agent| agent == SeparatedRelationsAgent::ID);
        if relations_enabled {
            if relations.label.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "recommendation.separated_relations.label must not be empty",
                ));
            }
            if relations.separators.iter().all(|s| s.trim().is_empty()) {
                return Err(ConfigError::invalid(
                    "recommendation.separated_relations.separators must not be empty",
                ));
            }
        }
        Ok(())
    }
}

fn reject_duplicates(field: &str, ids: &[String]) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(ConfigError::invalid(format!(
                "{field} lists '{id}' more than once"
            )));
        }
    }
    Ok(())
}
