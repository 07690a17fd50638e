use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::config::DictionarySettings;
use crate::context::ComparisonContext;
use crate::measures::WordSimMeasure;
use crate::utils::normalize_term;

/// A lexical resource that knows which terms share a meaning.
pub trait LexicalResource: Send + Sync + fmt::Debug {
    fn are_synonyms(&self, first: &str, second: &str) -> bool;
}

/// In-memory synonym groups, matched on normalized terms.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    groups: BTreeMap<String, BTreeSet<usize>>,
}

impl SynonymDictionary {
    pub fn new<G, T>(groups: G) -> Self
    where
        G: IntoIterator,
        G::Item: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut index: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        for (group, terms) in groups.into_iter().enumerate() {
            for term in terms {
                index
                    .entry(normalize_term(term.as_ref()))
                    .or_default()
                    .insert(group);
            }
        }
        Self { groups: index }
    }

    pub fn from_settings(settings: &DictionarySettings) -> Self {
        Self::new(&settings.synonyms)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl LexicalResource for SynonymDictionary {
    fn are_synonyms(&self, first: &str, second: &str) -> bool {
        let (Some(first), Some(second)) = (
            self.groups.get(&normalize_term(first)),
            self.groups.get(&normalize_term(second)),
        ) else {
            return false;
        };
        !first.is_disjoint(second)
    }
}

/// Similar iff the backing lexical resource lists the terms as synonyms.
#[derive(Debug, Clone)]
pub struct DictionaryMeasure {
    resource: Arc<dyn LexicalResource>,
}

impl DictionaryMeasure {
    pub fn new(resource: Arc<dyn LexicalResource>) -> Self {
        Self { resource }
    }
}

impl WordSimMeasure for DictionaryMeasure {
    fn id(&self) -> &'static str {
        "dictionary"
    }

    fn are_words_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        self.resource
            .are_synonyms(ctx.first_term(), ctx.second_term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_in_one_group_are_synonyms() {
        let dictionary = SynonymDictionary::new([
            vec!["Database", "DB", "data store"],
            vec!["UI", "frontend"],
        ]);
        let measure = DictionaryMeasure::new(Arc::new(dictionary));
        assert!(measure.are_words_similar(&ComparisonContext::new("db", "Data_Store")));
        assert!(measure.are_words_similar(&ComparisonContext::new("Frontend", "ui")));
        assert!(!measure.are_words_similar(&ComparisonContext::new("DB", "UI")));
        assert!(!measure.are_words_similar(&ComparisonContext::new("cache", "cache")));
    }
}
