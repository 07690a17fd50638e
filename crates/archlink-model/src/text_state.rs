//! Output of text extraction: all noun mappings of one document, indexed by word.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::error::{ModelError, Result};
use crate::ids::MappingId;
use crate::mapping::{MappingKind, NounMapping};
use crate::text::Text;

#[derive(Debug, Clone, Default)]
pub struct TextState {
    mappings: Vec<Arc<NounMapping>>,
    by_word: BTreeMap<usize, Vec<usize>>,
}

impl TextState {
    /// Indexes the mappings of `text`.
    ///
    /// Fails on duplicate ids, confidences outside `[0, 1]`, or mappings that
    /// reference words missing from the text.
    pub fn new(text: &Text, mappings: Vec<NounMapping>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut by_word: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (index, mapping) in mappings.iter().enumerate() {
            if !seen.insert(mapping.id) {
                return Err(ModelError::DuplicateMappingId(mapping.id));
            }
            mapping.validate()?;
            for &position in &mapping.words {
                if text.word(position).is_none() {
                    return Err(ModelError::UnknownWord {
                        mapping: mapping.id,
                        position,
                    });
                }
                by_word.entry(position).or_default().push(index);
            }
            if let Some(position) = mapping
                .occurrences
                .iter()
                .flat_map(|occurrence| occurrence.words.iter().copied())
                .find(|&position| text.word(position).is_none())
            {
                return Err(ModelError::UnknownWord {
                    mapping: mapping.id,
                    position,
                });
            }
        }
        Ok(Self {
            mappings: mappings.into_iter().map(Arc::new).collect(),
            by_word,
        })
    }

    pub fn mappings(&self) -> &[Arc<NounMapping>] {
        &self.mappings
    }

    pub fn mapping(&self, id: MappingId) -> Option<&Arc<NounMapping>> {
        self.mappings.iter().find(|mapping| mapping.id == id)
    }

    /// Mappings that contain the word at `position`.
    pub fn mappings_by_word(&self, position: usize) -> impl Iterator<Item = &Arc<NounMapping>> {
        self.by_word
            .get(&position)
            .into_iter()
            .flatten()
            .map(|&index| &self.mappings[index])
    }

    /// Mappings containing the word at `position` whose dominant role is `kind`.
    pub fn mappings_by_word_and_kind(
        &self,
        position: usize,
        kind: MappingKind,
    ) -> impl Iterator<Item = &Arc<NounMapping>> {
        self.mappings_by_word(position)
            .filter(move |mapping| mapping.kind() == kind)
    }

    pub fn names(&self) -> impl Iterator<Item = &Arc<NounMapping>> {
        self.mappings
            .iter()
            .filter(|mapping| mapping.kind() == MappingKind::Name)
    }

    pub fn types(&self) -> impl Iterator<Item = &Arc<NounMapping>> {
        self.mappings
            .iter()
            .filter(|mapping| mapping.kind() == MappingKind::Type)
    }
}
