//! Serializable view of a finished recommendation state.

use std::fmt::Write as _;

use archlink_recommend::{InstanceId, RecommendationState};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub document: Option<String>,
    pub instances: Vec<InstanceRow>,
    pub relations: Vec<RelationRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceRow {
    pub id: InstanceId,
    pub name: String,
    pub type_name: String,
    pub probability: f64,
    pub mapping_probability: f64,
    pub own_probability: f64,
    pub name_mappings: usize,
    pub type_mappings: usize,
    pub claimants: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelationRow {
    pub kind: String,
    pub participants: Vec<String>,
    pub probability: f64,
    pub claimants: Vec<String>,
    pub evidence: Vec<String>,
}

impl RecommendationReport {
    pub fn from_state(document: Option<String>, state: &RecommendationState) -> Self {
        let instances = state
            .instances()
            .map(|(id, instance)| InstanceRow {
                id,
                name: instance.name().to_string(),
                type_name: instance.type_name().to_string(),
                probability: instance.probability(),
                mapping_probability: instance.mapping_probability(),
                own_probability: instance.own_probability(),
                name_mappings: instance.name_mapping_count(),
                type_mappings: instance.type_mapping_count(),
                claimants: instance
                    .internal_confidence()
                    .claimants()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect();
        let relations = state
            .relations()
            .iter()
            .map(|relation| RelationRow {
                kind: relation.kind().to_string(),
                participants: relation
                    .participants()
                    .map(|id| instance_label(state, id))
                    .collect(),
                probability: relation.probability(),
                claimants: relation.claimants().map(ToString::to_string).collect(),
                evidence: relation
                    .evidence()
                    .iter()
                    .map(|word| word.text.clone())
                    .collect(),
            })
            .collect();
        Self {
            document,
            instances,
            relations,
        }
    }

    /// Plain-text rendering, one line per instance and relation.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(document) = &self.document {
            let _ = writeln!(out, "document: {document}");
        }
        let _ = writeln!(out, "instances: {}", self.instances.len());
        for row in &self.instances {
            let _ = writeln!(
                out,
                "  {} {} : {} p={:.3} (mappings {:.3}, own {:.3}) names={} types={}",
                row.id,
                row.name,
                row.type_name,
                row.probability,
                row.mapping_probability,
                row.own_probability,
                row.name_mappings,
                row.type_mappings,
            );
        }
        let _ = writeln!(out, "relations: {}", self.relations.len());
        for row in &self.relations {
            let _ = writeln!(
                out,
                "  {} [{}] p={:.3} evidence=\"{}\"",
                row.kind,
                row.participants.join(", "),
                row.probability,
                row.evidence.join(" "),
            );
        }
        out
    }
}

fn instance_label(state: &RecommendationState, id: InstanceId) -> String {
    state
        .get(id)
        .map_or_else(|| id.to_string(), |instance| instance.name().to_string())
}
