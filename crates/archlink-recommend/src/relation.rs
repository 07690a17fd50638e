//! Relations inferred between recommended instances.

use std::fmt;

use archlink_model::{Claimant, Occurrence};
use serde::Serialize;

use crate::confidence::{AggregationFunction, Confidence};

/// Handle to an instance stored in a
/// [`RecommendationState`](crate::state::RecommendationState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InstanceId(usize);

impl InstanceId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

/// An association between two or more recommended instances.
///
/// Identity is the kind together with the ordered participants; only the
/// evidence and claimant confidence grow after creation.
#[derive(Debug, Clone)]
pub struct RecommendedRelation {
    kind: String,
    endpoint_a: InstanceId,
    endpoint_b: InstanceId,
    extra_participants: Vec<InstanceId>,
    confidence: Confidence,
    evidence: Vec<Occurrence>,
}

impl RecommendedRelation {
    pub fn new(
        kind: impl Into<String>,
        endpoint_a: InstanceId,
        endpoint_b: InstanceId,
        extra_participants: Vec<InstanceId>,
    ) -> Self {
        Self {
            kind: kind.into(),
            endpoint_a,
            endpoint_b,
            extra_participants,
            confidence: Confidence::new(AggregationFunction::Average),
            evidence: Vec::new(),
        }
    }

    pub fn with_probability(mut self, claimant: Claimant, probability: f64) -> Self {
        self.confidence.add_agent_confidence(claimant, probability);
        self
    }

    pub fn with_evidence(mut self, evidence: impl IntoIterator<Item = Occurrence>) -> Self {
        self.add_evidence(evidence);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn endpoint_a(&self) -> InstanceId {
        self.endpoint_a
    }

    pub fn endpoint_b(&self) -> InstanceId {
        self.endpoint_b
    }

    pub fn extra_participants(&self) -> &[InstanceId] {
        &self.extra_participants
    }

    /// Endpoints followed by the extra participants.
    pub fn participants(&self) -> impl Iterator<Item = InstanceId> {
        [self.endpoint_a, self.endpoint_b]
            .into_iter()
            .chain(self.extra_participants.iter().copied())
    }

    pub fn probability(&self) -> f64 {
        self.confidence.confidence()
    }

    pub fn claimants(&self) -> impl Iterator<Item = &Claimant> {
        self.confidence.claimants()
    }

    pub fn evidence(&self) -> &[Occurrence] {
        &self.evidence
    }

    /// Appends occurrences not yet recorded as evidence.
    pub fn add_evidence(&mut self, evidence: impl IntoIterator<Item = Occurrence>) {
        for occurrence in evidence {
            if !self.evidence.contains(&occurrence) {
                self.evidence.push(occurrence);
            }
        }
    }

    pub(crate) fn merge(&mut self, other: Self) {
        for claimant in other.confidence.claimants() {
            if let Some(score) = other.confidence.get(claimant) {
                self.confidence.add_agent_confidence(claimant.clone(), score);
            }
        }
        self.add_evidence(other.evidence);
    }

    /// Whether `other` denotes the same relation.
    pub fn same_relation(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.endpoint_a == other.endpoint_a
            && self.endpoint_b == other.endpoint_b
            && self.extra_participants == other.extra_participants
    }
}
