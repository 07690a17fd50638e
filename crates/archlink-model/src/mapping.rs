//! Noun mappings: groups of occurrences believed to name or type the same
//! candidate element.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::MappingId;

/// The role a noun mapping plays for a candidate element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingKind {
    /// The mapping names an element (e.g. "Database").
    Name,
    /// The mapping types an element (e.g. "component").
    Type,
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("NAME"),
            Self::Type => f.write_str("TYPE"),
        }
    }
}

/// One surface form of a noun mapping and the word positions it spans.
///
/// Documents may give an occurrence as a bare string, in which case it spans
/// no known words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MappingOccurrenceRepr")]
pub struct MappingOccurrence {
    pub text: String,
    pub words: Vec<usize>,
}

impl MappingOccurrence {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            words: Vec::new(),
        }
    }

    pub fn with_words(mut self, words: impl IntoIterator<Item = usize>) -> Self {
        self.words = words.into_iter().collect();
        self
    }
}

impl From<&str> for MappingOccurrence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MappingOccurrence {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MappingOccurrenceRepr {
    Text(String),
    Span {
        text: String,
        #[serde(default)]
        words: Vec<usize>,
    },
}

impl From<MappingOccurrenceRepr> for MappingOccurrence {
    fn from(repr: MappingOccurrenceRepr) -> Self {
        match repr {
            MappingOccurrenceRepr::Text(text) => Self::new(text),
            MappingOccurrenceRepr::Span { text, words } => Self { text, words },
        }
    }
}

/// Evidence that a set of words names and/or types a candidate element.
///
/// Noun mappings are produced by text extraction and never mutated by the
/// recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NounMapping {
    pub id: MappingId,
    /// Canonical surface form of the mapping.
    pub reference: String,
    /// Positions of the words that make up this mapping.
    #[serde(default)]
    pub words: Vec<usize>,
    /// Surface forms under which the mapping occurs in the text.
    ///
    /// These may span several words, e.g. "Client, Server and Database".
    #[serde(default)]
    pub occurrences: Vec<MappingOccurrence>,
    /// Confidence that the mapping denotes a name.
    #[serde(default)]
    pub name_confidence: f64,
    /// Confidence that the mapping denotes a type.
    #[serde(default)]
    pub type_confidence: f64,
}

impl NounMapping {
    pub fn new(id: MappingId, reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Self {
            id,
            occurrences: vec![MappingOccurrence::new(reference.as_str())],
            reference,
            words: Vec::new(),
            name_confidence: 0.0,
            type_confidence: 0.0,
        }
    }

    pub fn with_words(mut self, words: impl IntoIterator<Item = usize>) -> Self {
        self.words = words.into_iter().collect();
        self
    }

    pub fn with_occurrences<I, S>(mut self, occurrences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MappingOccurrence>,
    {
        self.occurrences = occurrences.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_confidence(mut self, kind: MappingKind, value: f64) -> Self {
        match kind {
            MappingKind::Name => self.name_confidence = value,
            MappingKind::Type => self.type_confidence = value,
        }
        self
    }

    /// Confidence that this mapping plays the given role.
    pub fn probability_for_kind(&self, kind: MappingKind) -> f64 {
        match kind {
            MappingKind::Name => self.name_confidence,
            MappingKind::Type => self.type_confidence,
        }
    }

    /// The dominant role; ties resolve to [`MappingKind::Name`].
    pub fn kind(&self) -> MappingKind {
        if self.type_confidence > self.name_confidence {
            MappingKind::Type
        } else {
            MappingKind::Name
        }
    }

    pub fn contains_word(&self, position: usize) -> bool {
        self.words.contains(&position)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for kind in [MappingKind::Name, MappingKind::Type] {
            let value = self.probability_for_kind(kind);
            if !(0.0..=1.0).contains(&value) {
                return Err(ModelError::InvalidConfidence {
                    mapping: self.id,
                    kind,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for NounMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NounMapping {} '{}' [{}: {:.2}, {}: {:.2}]",
            self.id,
            self.reference,
            MappingKind::Name,
            self.name_confidence,
            MappingKind::Type,
            self.type_confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_higher_confidence() {
        let mapping = NounMapping::new(MappingId::new(1), "component")
            .with_confidence(MappingKind::Name, 0.2)
            .with_confidence(MappingKind::Type, 0.8);
        assert_eq!(mapping.kind(), MappingKind::Type);
        assert_eq!(mapping.probability_for_kind(MappingKind::Type), 0.8);
    }

    #[test]
    fn default_occurrence_is_reference() {
        let mapping = NounMapping::new(MappingId::new(2), "Database");
        assert_eq!(mapping.occurrences, vec![MappingOccurrence::new("Database")]);
        assert_eq!(mapping.kind(), MappingKind::Name);
    }

    #[test]
    fn occurrences_accept_plain_strings_and_spans() {
        let mapping: NounMapping = serde_json::from_str(
            r#"{
                "id": 4,
                "reference": "Client",
                "occurrences": ["Client", { "text": "Client and Server", "words": [3, 4, 5] }]
            }"#,
        )
        .unwrap();
        assert_eq!(
            mapping.occurrences,
            vec![
                MappingOccurrence::new("Client"),
                MappingOccurrence::new("Client and Server").with_words([3, 4, 5]),
            ]
        );
    }

    #[test]
    fn out_of_range_confidence_is_invalid() {
        let mapping =
            NounMapping::new(MappingId::new(3), "x").with_confidence(MappingKind::Name, 1.5);
        assert!(matches!(
            mapping.validate(),
            Err(ModelError::InvalidConfidence {
                kind: MappingKind::Name,
                ..
            })
        ));
    }
}
