//! Loading a document and running the recommendation stage over it.

use std::path::Path;

use anyhow::{Context, Result};
use archlink_config::ArchlinkConfig;
use archlink_model::Document;
use archlink_recommend::RecommendationGenerator;
use tracing::{info, info_span};

use crate::report::RecommendationReport;

pub fn load_document(path: &Path) -> Result<Document> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read document {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse document {}", path.display()))
}

/// Resolves every configured measure, strategy, agent and extractor.
pub fn build_generator(config: &ArchlinkConfig) -> Result<RecommendationGenerator> {
    RecommendationGenerator::from_config(&config.similarity, &config.recommendation)
        .context("build recommendation engine")
}

/// Runs `generator` over `document`.
pub fn recommend(
    document: Document,
    generator: &RecommendationGenerator,
) -> Result<RecommendationReport> {
    let name = document.name.clone();
    let span = info_span!("document", name = name.as_deref().unwrap_or("<unnamed>"));
    let _guard = span.enter();
    let (text, text_state) = document.into_parts().context("validate document")?;
    info!(
        words = text.len(),
        mappings = text_state.mappings().len(),
        "document loaded"
    );
    let state = generator
        .run(text, text_state)
        .context("run recommendation")?;
    Ok(RecommendationReport::from_state(name, &state))
}

/// Builds the engine from `config`, then loads and processes the document at
/// `path`. Configuration errors surface before the document is read.
pub fn recommend_file(path: &Path, config: &ArchlinkConfig) -> Result<RecommendationReport> {
    let generator = build_generator(config)?;
    let document = load_document(path)?;
    recommend(document, &generator)
}
