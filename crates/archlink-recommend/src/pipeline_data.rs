//! Explicit data context handed from one pipeline stage to the next.

use std::sync::Arc;

use archlink_model::{Text, TextState};
use tracing::warn;

use crate::error::{RecommendError, Result};
use crate::state::RecommendationState;

/// Everything the stages of one document run produce and consume.
///
/// Each slot is set once. Later attempts to set an occupied slot are logged
/// and ignored so the first producer wins.
#[derive(Debug, Default)]
pub struct PipelineData {
    text: Option<Arc<Text>>,
    text_state: Option<Arc<TextState>>,
    recommendation_state: Option<RecommendationState>,
}

impl PipelineData {
    pub fn new(text: Text, text_state: TextState) -> Self {
        Self {
            text: Some(Arc::new(text)),
            text_state: Some(Arc::new(text_state)),
            recommendation_state: None,
        }
    }

    /// Returns `false` if a text was already present.
    pub fn extend_text(&mut self, text: Text) -> bool {
        fill("text", &mut self.text, Arc::new(text))
    }

    /// Returns `false` if a text state was already present.
    pub fn extend_text_state(&mut self, text_state: TextState) -> bool {
        fill("text_state", &mut self.text_state, Arc::new(text_state))
    }

    /// Returns `false` if a recommendation state was already present.
    pub fn extend_recommendation_state(&mut self, state: RecommendationState) -> bool {
        fill("recommendation_state", &mut self.recommendation_state, state)
    }

    pub fn text(&self) -> Result<&Arc<Text>> {
        self.text.as_ref().ok_or(RecommendError::MissingInput("text"))
    }

    pub fn text_state(&self) -> Result<&Arc<TextState>> {
        self.text_state
            .as_ref()
            .ok_or(RecommendError::MissingInput("text_state"))
    }

    pub fn recommendation_state(&self) -> Result<&RecommendationState> {
        self.recommendation_state
            .as_ref()
            .ok_or(RecommendError::MissingInput("recommendation_state"))
    }

    pub fn recommendation_state_mut(&mut self) -> Result<&mut RecommendationState> {
        self.recommendation_state
            .as_mut()
            .ok_or(RecommendError::MissingInput("recommendation_state"))
    }

    pub fn take_recommendation_state(&mut self) -> Option<RecommendationState> {
        self.recommendation_state.take()
    }
}

fn fill<T>(slot_name: &'static str, slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        warn!(slot = slot_name, "pipeline data already set; keeping the first value");
        return false;
    }
    *slot = Some(value);
    true
}

#[cfg(test)]
mod tests {
    use archlink_model::Occurrence;

    use super::*;

    #[test]
    fn first_value_wins() {
        let mut data = PipelineData::default();
        let first = Text::new(vec![Occurrence::new("first", 0, 0)]).unwrap();
        let second = Text::new(vec![Occurrence::new("second", 0, 0)]).unwrap();
        assert!(data.extend_text(first));
        assert!(!data.extend_text(second));
        assert_eq!(data.text().unwrap().words()[0].text, "first");
    }

    #[test]
    fn missing_slots_are_reported() {
        let mut data = PipelineData::default();
        assert!(matches!(
            data.text_state(),
            Err(RecommendError::MissingInput("text_state"))
        ));
        assert!(data.recommendation_state_mut().is_err());
        assert!(data.take_recommendation_state().is_none());
    }
}
