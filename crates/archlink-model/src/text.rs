//! Read-only view of the analysed document text.
//!
//! Words are produced by the linguistic pre-processing stage; the engine only
//! reads them to find neighbours and to attach evidence to relations.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single word of the text with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Occurrence {
    /// Surface text as it appears in the document.
    pub text: String,
    /// Position of the word within the whole document (0-based).
    pub position: usize,
    /// Index of the sentence containing the word (0-based).
    pub sentence_no: usize,
}

impl Occurrence {
    pub fn new(text: impl Into<String>, position: usize, sentence_no: usize) -> Self {
        Self {
            text: text.into(),
            position,
            sentence_no,
        }
    }
}

/// Ordered sequence of words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Occurrence>", into = "Vec<Occurrence>")]
pub struct Text {
    words: Vec<Occurrence>,
}

impl Text {
    /// Builds a text from words in any order.
    ///
    /// Words are ordered by position; two words sharing a position are rejected.
    pub fn new(mut words: Vec<Occurrence>) -> Result<Self> {
        words.sort_by_key(|word| word.position);
        if let Some(pair) = words
            .windows(2)
            .find(|pair| pair[0].position == pair[1].position)
        {
            return Err(ModelError::DuplicatePosition(pair[0].position));
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[Occurrence] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, position: usize) -> Option<&Occurrence> {
        self.index_of(position).map(|index| &self.words[index])
    }

    /// The word directly preceding the word at `position`.
    pub fn pre_word(&self, position: usize) -> Option<&Occurrence> {
        let index = self.index_of(position)?;
        index.checked_sub(1).map(|prev| &self.words[prev])
    }

    /// The word directly following the word at `position`.
    pub fn next_word(&self, position: usize) -> Option<&Occurrence> {
        let index = self.index_of(position)?;
        self.words.get(index + 1)
    }

    fn index_of(&self, position: usize) -> Option<usize> {
        self.words
            .binary_search_by_key(&position, |word| word.position)
            .ok()
    }
}

impl TryFrom<Vec<Occurrence>> for Text {
    type Error = ModelError;

    fn try_from(words: Vec<Occurrence>) -> Result<Self> {
        Self::new(words)
    }
}

impl From<Text> for Vec<Occurrence> {
    fn from(text: Text) -> Self {
        text.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Text {
        Text::new(vec![
            Occurrence::new("Database", 1, 0),
            Occurrence::new("The", 0, 0),
            Occurrence::new("component", 2, 0),
        ])
        .unwrap()
    }

    #[test]
    fn words_are_ordered_by_position() {
        let text = sample();
        let surface: Vec<&str> = text.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(surface, vec!["The", "Database", "component"]);
    }

    #[test]
    fn neighbours_follow_word_order() {
        let text = sample();
        assert_eq!(text.pre_word(1).map(|w| w.text.as_str()), Some("The"));
        assert_eq!(text.next_word(1).map(|w| w.text.as_str()), Some("component"));
        assert!(text.pre_word(0).is_none());
        assert!(text.next_word(2).is_none());
        assert!(text.next_word(7).is_none());
    }

    #[test]
    fn duplicate_positions_are_rejected() {
        let err = Text::new(vec![Occurrence::new("a", 3, 0), Occurrence::new("b", 3, 0)])
            .unwrap_err();
        assert_eq!(err, ModelError::DuplicatePosition(3));
    }
}
