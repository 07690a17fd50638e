pub mod document;
pub mod error;
pub mod ids;
pub mod mapping;
pub mod text;
pub mod text_state;

pub use document::Document;
pub use error::{ModelError, Result};
pub use ids::{Claimant, MappingId};
pub use mapping::{MappingKind, MappingOccurrence, NounMapping};
pub use text::{Occurrence, Text};
pub use text_state::TextState;
