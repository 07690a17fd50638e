//! The recommended-instance registry of one document.

use std::sync::Arc;

use archlink_model::{Claimant, NounMapping};
use archlink_similarity::TermComparer;
use tracing::debug;

use crate::instance::RecommendedInstance;
use crate::relation::{InstanceId, RecommendedRelation};

/// Deduplicated store of recommended instances and the relations between
/// them.
///
/// Instances are merged when their names are similar according to the
/// configured [`TermComparer`] and their types are equal. Cloning yields an
/// independent snapshot; the noun mappings themselves are shared read-only.
#[derive(Debug, Clone, Default)]
pub struct RecommendationState {
    comparer: TermComparer,
    bias_weight: i32,
    instances: Vec<RecommendedInstance>,
    relations: Vec<RecommendedRelation>,
}

impl RecommendationState {
    pub fn new(comparer: TermComparer) -> Self {
        Self {
            comparer,
            ..Self::default()
        }
    }

    /// Bias weight applied to instances created from now on.
    pub fn with_bias_weight(mut self, bias_weight: i32) -> Self {
        self.bias_weight = bias_weight;
        self
    }

    pub fn comparer(&self) -> &TermComparer {
        &self.comparer
    }

    /// Creates a new instance or merges into an existing one with a similar
    /// name and the same type.
    ///
    /// Merging unions the mapping sets and records `probability` for
    /// `claimant`, replacing any earlier score by the same claimant.
    pub fn add_recommended_instance(
        &mut self,
        name: &str,
        type_name: &str,
        claimant: Claimant,
        probability: f64,
        name_mappings: &[Arc<NounMapping>],
        type_mappings: &[Arc<NounMapping>],
    ) -> InstanceId {
        let existing = self.instances.iter().position(|instance| {
            instance.type_name() == type_name
                && self.comparer.are_words_similar(instance.name(), name)
        });
        let index = match existing {
            Some(index) => {
                debug!(
                    name,
                    existing = self.instances[index].name(),
                    type_name,
                    %claimant,
                    "merged recommended instance"
                );
                index
            }
            None => {
                debug!(name, type_name, %claimant, "created recommended instance");
                let instance =
                    RecommendedInstance::new(name, type_name).with_bias_weight(self.bias_weight);
                self.instances.push(instance);
                self.instances.len() - 1
            }
        };
        let instance = &mut self.instances[index];
        instance.add_mappings(name_mappings, type_mappings);
        instance.add_probability(claimant, probability);
        InstanceId::new(index)
    }

    pub fn get(&self, id: InstanceId) -> Option<&RecommendedInstance> {
        self.instances.get(id.index())
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut RecommendedInstance> {
        self.instances.get_mut(id.index())
    }

    /// Exact lookup by name and type.
    pub fn instance(&self, name: &str, type_name: &str) -> Option<InstanceId> {
        self.instances
            .iter()
            .position(|instance| instance.name() == name && instance.type_name() == type_name)
            .map(InstanceId::new)
    }

    /// Instances whose name is similar to `name`, in insertion order.
    pub fn instances_by_similar_name(&self, name: &str) -> Vec<InstanceId> {
        self.ids()
            .filter(|&id| {
                self.comparer
                    .are_words_similar(self.instances[id.index()].name(), name)
            })
            .collect()
    }

    pub fn instances_by_type(&self, type_name: &str) -> Vec<InstanceId> {
        self.ids()
            .filter(|&id| self.instances[id.index()].type_name() == type_name)
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = InstanceId> + use<> {
        (0..self.instances.len()).map(InstanceId::new)
    }

    pub fn instances(&self) -> impl Iterator<Item = (InstanceId, &RecommendedInstance)> {
        self.instances
            .iter()
            .enumerate()
            .map(|(index, instance)| (InstanceId::new(index), instance))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Registers `relation`, or folds its evidence into an equal relation
    /// that is already registered. Returns the relation's index.
    pub fn add_recommended_relation(&mut self, relation: RecommendedRelation) -> usize {
        if let Some(index) = self
            .relations
            .iter()
            .position(|existing| existing.same_relation(&relation))
        {
            self.relations[index].merge(relation);
            return index;
        }
        debug!(
            kind = relation.kind(),
            participants = ?relation.participants().collect::<Vec<_>>(),
            "added recommended relation"
        );
        self.relations.push(relation);
        self.relations.len() - 1
    }

    pub fn relations(&self) -> &[RecommendedRelation] {
        &self.relations
    }

    /// Drops every instance and relation.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.relations.clear();
    }
}

#[cfg(test)]
mod tests {
    use archlink_model::{MappingId, MappingKind};
    use archlink_similarity::SimilarityConfig;

    use super::*;

    fn state() -> RecommendationState {
        let comparer = TermComparer::from_config(&SimilarityConfig::default()).unwrap();
        RecommendationState::new(comparer)
    }

    fn name_mapping(id: u32, reference: &str) -> Arc<NounMapping> {
        Arc::new(
            NounMapping::new(MappingId::new(id), reference).with_confidence(MappingKind::Name, 1.0),
        )
    }

    #[test]
    fn similar_names_with_same_type_merge() {
        let mut state = state();
        let first = state.add_recommended_instance(
            "Authentication",
            "component",
            Claimant::component("a"),
            0.5,
            &[name_mapping(1, "Authentication")],
            &[],
        );
        let second = state.add_recommended_instance(
            "Authentification",
            "component",
            Claimant::component("a"),
            0.9,
            &[name_mapping(1, "Authentication"), name_mapping(2, "Authentification")],
            &[],
        );
        assert_eq!(first, second);
        assert_eq!(state.len(), 1);
        let instance = state.get(first).unwrap();
        assert_eq!(instance.name(), "Authentication");
        assert_eq!(instance.name_mapping_count(), 2);
        assert_eq!(instance.own_probability(), 0.9);
    }

    #[test]
    fn different_types_stay_apart() {
        let mut state = state();
        state.add_recommended_instance("Cache", "component", Claimant::component("a"), 1.0, &[], &[]);
        state.add_recommended_instance("Cache", "interface", Claimant::component("a"), 1.0, &[], &[]);
        assert_eq!(state.len(), 2);
        assert!(state.instance("Cache", "interface").is_some());
        assert_eq!(state.instances_by_type("component").len(), 1);
        assert_eq!(state.instances_by_similar_name("cache").len(), 2);
    }

    #[test]
    fn equal_relations_are_deduplicated() {
        let mut state = state();
        let a = state.add_recommended_instance("Client", "component", Claimant::component("a"), 1.0, &[], &[]);
        let b = state.add_recommended_instance("Server", "component", Claimant::component("a"), 1.0, &[], &[]);
        let claimant = Claimant::component("r");
        let first = state.add_recommended_relation(
            RecommendedRelation::new("separated", a, b, vec![]).with_probability(claimant.clone(), 1.0),
        );
        let second = state.add_recommended_relation(
            RecommendedRelation::new("separated", a, b, vec![])
                .with_probability(claimant, 1.0)
                .with_evidence([archlink_model::Occurrence::new("Client", 0, 0)]),
        );
        assert_eq!(first, second);
        assert_eq!(state.relations().len(), 1);
        assert_eq!(state.relations()[0].evidence().len(), 1);
    }

    #[test]
    fn clone_is_a_deep_snapshot() {
        let mut state = state();
        let id = state.add_recommended_instance("Client", "component", Claimant::component("a"), 0.2, &[], &[]);
        let snapshot = state.clone();
        state.add_recommended_instance("Client", "component", Claimant::component("a"), 0.8, &[], &[]);
        state.add_recommended_instance("Server", "component", Claimant::component("a"), 0.8, &[], &[]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(id).unwrap().own_probability(), 0.2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = state();
        state.add_recommended_instance("Client", "component", Claimant::component("a"), 1.0, &[], &[]);
        state.clear();
        assert!(state.is_empty());
        assert!(state.relations().is_empty());
    }
}
