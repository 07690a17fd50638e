use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mapping::NounMapping;
use crate::text::Text;
use crate::text_state::TextState;

/// Serialized hand-off from the text-processing stages: words plus noun mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: Option<String>,
    pub text: Text,
    #[serde(default)]
    pub mappings: Vec<NounMapping>,
}

impl Document {
    /// Validates the mappings against the text and builds the indexed state.
    pub fn into_parts(self) -> Result<(Text, TextState)> {
        let state = TextState::new(&self.text, self.mappings)?;
        Ok((self.text, state))
    }
}
