//! Relations between instances enumerated together, as in
//! "the Client, Server and Database components".

use archlink_model::{Claimant, MappingOccurrence, Occurrence, Text};
use tracing::{debug, trace};

use crate::agents::RecommendationAgent;
use crate::config::RecommendationConfig;
use crate::error::{Result, single_probability};
use crate::pipeline_data::PipelineData;
use crate::relation::{InstanceId, RecommendedRelation};
use crate::separators::Separators;
use crate::state::RecommendationState;
use crate::utils::cartesian_product;

#[derive(Debug, Clone)]
pub struct SeparatedRelationsAgent {
    probability: f64,
    label: String,
    separators: Separators,
}

impl SeparatedRelationsAgent {
    pub const ID: &'static str = "separated_relations";

    pub fn new(probability: f64, label: impl Into<String>, separators: Separators) -> Self {
        Self {
            probability,
            label: label.into(),
            separators,
        }
    }

    pub fn from_config(config: &RecommendationConfig) -> Result<Self> {
        let settings = &config.separated_relations;
        let probability = single_probability(Self::ID, &[settings.probability])?;
        let mut agent = Self::new(
            probability,
            settings.label.clone(),
            Separators::new(&settings.separators),
        );
        if let Some(probabilities) = config.probabilities_for(Self::ID) {
            agent.set_probabilities(probabilities)?;
        }
        Ok(agent)
    }

    pub fn set_probabilities(&mut self, probabilities: &[f64]) -> Result<()> {
        self.probability = single_probability(Self::ID, probabilities)?;
        Ok(())
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Registers a relation for every enumeration found in the name
    /// occurrences of the stored instances. Returns the number of relations
    /// that were not registered before.
    ///
    /// The words spanned by the enumeration become the relation's evidence.
    ///
    /// Each enumerated part resolves to the instance itself when it matches
    /// that instance's name, otherwise to every instance with a similar name.
    /// An enumeration with fewer than two parts, or with a part matching no
    /// instance, yields nothing.
    pub fn infer_relations(&self, state: &mut RecommendationState, text: Option<&Text>) -> usize {
        let before = state.relations().len();
        let claimant = Claimant::component(Self::ID);

        for id in state.ids() {
            let Some(instance) = state.get(id) else {
                continue;
            };
            let name = instance.name().to_string();
            let enumerations: Vec<MappingOccurrence> = instance
                .name_occurrences()
                .filter(|occurrence| self.separators.contains_separator(&occurrence.text))
                .cloned()
                .collect();

            for enumeration in enumerations {
                let occurrence = enumeration.text.as_str();
                let parts = self.separators.split(occurrence);
                if parts.len() < 2 {
                    trace!(occurrence, "enumeration with fewer than two parts");
                    continue;
                }
                let candidates: Vec<Vec<InstanceId>> = parts
                    .iter()
                    .map(|part| {
                        if state.comparer().are_words_similar(&name, part) {
                            vec![id]
                        } else {
                            state.instances_by_similar_name(part)
                        }
                    })
                    .collect();
                let tuples = cartesian_product(&candidates);
                if tuples.is_empty() {
                    debug!(occurrence, instance = %name, "enumeration part without a matching instance");
                    continue;
                }

                let evidence = evidence_for(text, &enumeration.words);
                for tuple in tuples {
                    let [endpoint_a, endpoint_b, extras @ ..] = tuple.as_slice() else {
                        continue;
                    };
                    let relation = RecommendedRelation::new(
                        self.label.as_str(),
                        *endpoint_a,
                        *endpoint_b,
                        extras.to_vec(),
                    )
                    .with_probability(claimant.clone(), self.probability)
                    .with_evidence(evidence.iter().cloned());
                    state.add_recommended_relation(relation);
                }
            }
        }

        state.relations().len() - before
    }
}

fn evidence_for(text: Option<&Text>, words: &[usize]) -> Vec<Occurrence> {
    let Some(text) = text else {
        return Vec::new();
    };
    words
        .iter()
        .filter_map(|&position| text.word(position).cloned())
        .collect()
}

impl RecommendationAgent for SeparatedRelationsAgent {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn execute(&self, data: &mut PipelineData) -> Result<()> {
        let text = data.text().ok().cloned();
        let state = data.recommendation_state_mut()?;
        let added = self.infer_relations(state, text.as_deref());
        debug!(added, total = state.relations().len(), "separated relations inferred");
        Ok(())
    }
}
