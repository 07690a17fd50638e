//! Candidate model elements inferred from text evidence.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use archlink_model::{Claimant, MappingId, MappingKind, MappingOccurrence, NounMapping};
use tracing::warn;

use crate::confidence::{AggregationFunction, Confidence, root_mean_square};

/// A recommended instance: a name/type pair backed by noun mappings and by
/// the confidence of the claimants that proposed it.
///
/// Equality and hashing use the exact `(name, type)` pair. Merging of
/// near-duplicates is decided by the registry, which compares names fuzzily.
#[derive(Debug, Clone)]
pub struct RecommendedInstance {
    name: String,
    type_name: String,
    name_mappings: BTreeMap<MappingId, Arc<NounMapping>>,
    type_mappings: BTreeMap<MappingId, Arc<NounMapping>>,
    internal_confidence: Confidence,
    bias_weight: i32,
}

impl RecommendedInstance {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            name_mappings: BTreeMap::new(),
            type_mappings: BTreeMap::new(),
            internal_confidence: Confidence::new(AggregationFunction::Average),
            bias_weight: 0,
        }
    }

    /// Positive weights favour the claimants' own confidence, negative weights
    /// favour the mapping evidence.
    pub fn with_bias_weight(mut self, bias_weight: i32) -> Self {
        self.bias_weight = bias_weight;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn bias_weight(&self) -> i32 {
        self.bias_weight
    }

    pub fn internal_confidence(&self) -> &Confidence {
        &self.internal_confidence
    }

    pub fn name_mappings(&self) -> impl Iterator<Item = &Arc<NounMapping>> {
        self.name_mappings.values()
    }

    pub fn type_mappings(&self) -> impl Iterator<Item = &Arc<NounMapping>> {
        self.type_mappings.values()
    }

    pub fn name_mapping_count(&self) -> usize {
        self.name_mappings.len()
    }

    pub fn type_mapping_count(&self) -> usize {
        self.type_mappings.len()
    }

    /// Adds a name mapping; returns `false` if it was already present.
    pub fn add_name(&mut self, mapping: Arc<NounMapping>) -> bool {
        add_mapping(&mut self.name_mappings, mapping)
    }

    /// Adds a type mapping; returns `false` if it was already present.
    pub fn add_type(&mut self, mapping: Arc<NounMapping>) -> bool {
        add_mapping(&mut self.type_mappings, mapping)
    }

    pub fn add_mappings<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a Arc<NounMapping>>,
        types: impl IntoIterator<Item = &'a Arc<NounMapping>>,
    ) {
        for mapping in names {
            self.add_name(Arc::clone(mapping));
        }
        for mapping in types {
            self.add_type(Arc::clone(mapping));
        }
    }

    pub fn add_probability(&mut self, claimant: Claimant, probability: f64) {
        self.internal_confidence
            .add_agent_confidence(claimant, probability);
    }

    /// Occurrences of all name mappings, in mapping id order.
    pub fn name_occurrences(&self) -> impl Iterator<Item = &MappingOccurrence> {
        self.name_mappings
            .values()
            .flat_map(|mapping| mapping.occurrences.iter())
    }

    /// RMS of the strongest NAME confidence and the strongest TYPE confidence.
    pub fn mapping_probability(&self) -> f64 {
        let name = strongest(&self.name_mappings, MappingKind::Name);
        let type_ = strongest(&self.type_mappings, MappingKind::Type);
        root_mean_square(name, type_)
    }

    pub fn own_probability(&self) -> f64 {
        self.internal_confidence.confidence()
    }

    /// Fused probability of mapping evidence and own evidence, biased by
    /// [`bias_weight`](Self::bias_weight).
    pub fn probability(&self) -> f64 {
        fuse_probabilities(
            self.mapping_probability(),
            self.own_probability(),
            self.bias_weight,
        )
    }
}

impl PartialEq for RecommendedInstance {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.type_name == other.type_name
    }
}

impl Eq for RecommendedInstance {}

impl Hash for RecommendedInstance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.type_name.hash(state);
    }
}

fn add_mapping(
    mappings: &mut BTreeMap<MappingId, Arc<NounMapping>>,
    mapping: Arc<NounMapping>,
) -> bool {
    if mappings.contains_key(&mapping.id) {
        return false;
    }
    mappings.insert(mapping.id, mapping);
    true
}

fn strongest(mappings: &BTreeMap<MappingId, Arc<NounMapping>>, kind: MappingKind) -> f64 {
    mappings
        .values()
        .map(|mapping| bounded_confidence(mapping, kind))
        .fold(0.0, f64::max)
}

/// Mapping confidence for `kind`, clamped into `[0, 1]` with NaN read as 0.
fn bounded_confidence(mapping: &NounMapping, kind: MappingKind) -> f64 {
    let value = mapping.probability_for_kind(kind);
    if value.is_nan() {
        warn!(mapping = %mapping.id, %kind, "treating NaN mapping confidence as 0");
        0.0
    } else if !(0.0..=1.0).contains(&value) {
        warn!(mapping = %mapping.id, %kind, value, "clamping mapping confidence into [0, 1]");
        value.clamp(0.0, 1.0)
    } else {
        value
    }
}

/// Averages `[mapping, own]` plus `|bias_weight| - 1` extra copies of `own`
/// (positive weight) or `mapping` (negative weight).
pub fn fuse_probabilities(mapping: f64, own: f64, bias_weight: i32) -> f64 {
    let mut values = vec![mapping, own];
    let extra = bias_weight.unsigned_abs().saturating_sub(1) as usize;
    if extra > 0 {
        let favoured = if bias_weight > 0 { own } else { mapping };
        values.extend(std::iter::repeat_n(favoured, extra));
    }
    AggregationFunction::Average.apply(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(id: u32, name: f64, type_: f64) -> Arc<NounMapping> {
        Arc::new(
            NounMapping::new(MappingId::new(id), format!("m{id}"))
                .with_confidence(MappingKind::Name, name)
                .with_confidence(MappingKind::Type, type_),
        )
    }

    #[test]
    fn fuse_without_bias_is_plain_average() {
        for bias in [-1, 0, 1] {
            assert!((fuse_probabilities(0.2, 0.6, bias) - 0.4).abs() < 1e-12);
        }
    }

    #[test]
    fn fuse_bias_favours_one_side() {
        // [0.0, 1.0, 1.0, 1.0]
        assert_eq!(fuse_probabilities(0.0, 1.0, 3), 0.75);
        // [0.0, 1.0, 0.0, 0.0]
        assert_eq!(fuse_probabilities(0.0, 1.0, -3), 0.25);
    }

    #[test]
    fn mapping_probability_uses_strongest_of_each_kind() {
        let mut instance = RecommendedInstance::new("Database", "component");
        instance.add_name(mapping(1, 0.4, 0.0));
        instance.add_name(mapping(2, 1.0, 0.0));
        instance.add_type(mapping(3, 0.0, 1.0));
        assert_eq!(instance.mapping_probability(), 1.0);

        let mut names_only = RecommendedInstance::new("Database", "component");
        names_only.add_name(mapping(1, 1.0, 0.0));
        assert!((names_only.mapping_probability() - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn probability_combines_mapping_and_own_evidence() {
        let mut instance = RecommendedInstance::new("Database", "component");
        instance.add_name(mapping(1, 1.0, 0.0));
        instance.add_type(mapping(2, 0.0, 1.0));
        instance.add_probability(Claimant::component("test"), 0.5);
        assert!((instance.probability() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn unchecked_mapping_confidences_keep_probability_in_range() {
        let mut instance = RecommendedInstance::new("Database", "component");
        instance.add_name(mapping(1, 1.5, 0.0));
        instance.add_type(mapping(2, 0.0, 1.5));
        instance.add_probability(Claimant::component("test"), 1.0);
        assert_eq!(instance.mapping_probability(), 1.0);
        assert_eq!(instance.probability(), 1.0);

        let mut degenerate = RecommendedInstance::new("Database", "component");
        degenerate.add_name(mapping(3, f64::NAN, 0.0));
        degenerate.add_type(mapping(4, 0.0, -2.0));
        assert_eq!(degenerate.mapping_probability(), 0.0);
        assert_eq!(degenerate.probability(), 0.0);
    }

    #[test]
    fn adding_a_mapping_twice_is_a_noop() {
        let mut instance = RecommendedInstance::new("Database", "component");
        assert!(instance.add_name(mapping(1, 1.0, 0.0)));
        assert!(!instance.add_name(mapping(1, 1.0, 0.0)));
        assert_eq!(instance.name_mapping_count(), 1);
    }

    #[test]
    fn equality_is_exact_on_name_and_type() {
        let mut first = RecommendedInstance::new("Database", "component");
        first.add_probability(Claimant::component("a"), 1.0);
        let second = RecommendedInstance::new("Database", "component");
        assert_eq!(first, second);
        assert_ne!(first, RecommendedInstance::new("Databases", "component"));
        assert_ne!(first, RecommendedInstance::new("Database", "store"));
    }

    #[test]
    fn clone_does_not_share_mapping_sets() {
        let mut original = RecommendedInstance::new("Database", "component");
        original.add_name(mapping(1, 1.0, 0.0));
        let mut copy = original.clone();
        copy.add_name(mapping(2, 1.0, 0.0));
        copy.add_probability(Claimant::component("a"), 1.0);
        assert_eq!(original.name_mapping_count(), 1);
        assert!(original.internal_confidence().is_empty());
    }
}
