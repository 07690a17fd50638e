//! Per-claimant evidence and its aggregation into a single probability.

use std::collections::BTreeMap;

use archlink_model::Claimant;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the per-claimant scores of a [`Confidence`] are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationFunction {
    #[default]
    Average,
    Max,
    Min,
    Median,
}

impl AggregationFunction {
    /// Aggregates `values`; an empty slice yields `0.0`.
    pub fn apply(self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        match self {
            Self::Average => values.iter().sum::<f64>() / values.len() as f64,
            Self::Max => values.iter().copied().fold(f64::MIN, f64::max),
            Self::Min => values.iter().copied().fold(f64::MAX, f64::min),
            Self::Median => {
                let mut sorted = values.to_vec();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                } else {
                    sorted[mid]
                }
            }
        }
    }
}

/// Merges two signals into one: `sqrt((a² + b²) / 2)`.
pub fn root_mean_square(first: f64, second: f64) -> f64 {
    ((first * first + second * second) / 2.0).sqrt()
}

/// Evidence for one entity, keyed by the claimant that submitted it.
///
/// Resubmitting from the same claimant replaces its previous score. Cloning
/// yields an independent record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Confidence {
    function: AggregationFunction,
    agent_confidence: BTreeMap<Claimant, f64>,
}

impl Confidence {
    pub fn new(function: AggregationFunction) -> Self {
        Self {
            function,
            agent_confidence: BTreeMap::new(),
        }
    }

    /// Records `score` for `claimant`, clamping it into `[0, 1]`.
    pub fn add_agent_confidence(&mut self, claimant: Claimant, score: f64) {
        let score = if score.is_nan() {
            warn!(%claimant, "discarding NaN confidence score");
            0.0
        } else if !(0.0..=1.0).contains(&score) {
            warn!(%claimant, score, "clamping confidence score into [0, 1]");
            score.clamp(0.0, 1.0)
        } else {
            score
        };
        self.agent_confidence.insert(claimant, score);
    }

    /// The aggregated score over all claimants.
    pub fn confidence(&self) -> f64 {
        let values: Vec<f64> = self.agent_confidence.values().copied().collect();
        self.function.apply(&values)
    }

    pub fn function(&self) -> AggregationFunction {
        self.function
    }

    pub fn get(&self, claimant: &Claimant) -> Option<f64> {
        self.agent_confidence.get(claimant).copied()
    }

    pub fn claimants(&self) -> impl Iterator<Item = &Claimant> {
        self.agent_confidence.keys()
    }

    pub fn len(&self) -> usize {
        self.agent_confidence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agent_confidence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claimant(name: &str) -> Claimant {
        Claimant::new(name).unwrap()
    }

    #[test]
    fn empty_aggregates_to_zero() {
        for function in [
            AggregationFunction::Average,
            AggregationFunction::Max,
            AggregationFunction::Min,
            AggregationFunction::Median,
        ] {
            assert_eq!(function.apply(&[]), 0.0);
            assert_eq!(Confidence::new(function).confidence(), 0.0);
        }
    }

    #[test]
    fn aggregation_functions() {
        let values = [0.2, 0.8, 0.5, 0.1];
        assert!((AggregationFunction::Average.apply(&values) - 0.4).abs() < 1e-12);
        assert_eq!(AggregationFunction::Max.apply(&values), 0.8);
        assert_eq!(AggregationFunction::Min.apply(&values), 0.1);
        assert!((AggregationFunction::Median.apply(&values) - 0.35).abs() < 1e-12);
        assert_eq!(AggregationFunction::Median.apply(&[0.3, 0.9, 0.1]), 0.3);
    }

    #[test]
    fn same_claimant_overwrites() {
        let mut confidence = Confidence::default();
        confidence.add_agent_confidence(claimant("a"), 0.2);
        confidence.add_agent_confidence(claimant("a"), 0.6);
        confidence.add_agent_confidence(claimant("b"), 1.0);
        assert_eq!(confidence.len(), 2);
        assert_eq!(confidence.get(&claimant("a")), Some(0.6));
        assert!((confidence.confidence() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let mut confidence = Confidence::new(AggregationFunction::Max);
        confidence.add_agent_confidence(claimant("high"), 3.0);
        confidence.add_agent_confidence(claimant("low"), -1.0);
        confidence.add_agent_confidence(claimant("nan"), f64::NAN);
        assert_eq!(confidence.get(&claimant("high")), Some(1.0));
        assert_eq!(confidence.get(&claimant("low")), Some(0.0));
        assert_eq!(confidence.get(&claimant("nan")), Some(0.0));
        assert_eq!(confidence.confidence(), 1.0);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Confidence::default();
        original.add_agent_confidence(claimant("a"), 0.4);
        let mut copy = original.clone();
        copy.add_agent_confidence(claimant("a"), 1.0);
        copy.add_agent_confidence(claimant("b"), 1.0);
        assert_eq!(original.len(), 1);
        assert_eq!(original.get(&claimant("a")), Some(0.4));
    }

    #[test]
    fn rms_treats_missing_signal_as_zero() {
        assert_eq!(root_mean_square(0.0, 0.0), 0.0);
        assert_eq!(root_mean_square(1.0, 1.0), 1.0);
        assert!((root_mean_square(1.0, 0.0) - 0.5_f64.sqrt()).abs() < 1e-12);
    }
}
