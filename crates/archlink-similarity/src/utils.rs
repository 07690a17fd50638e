//! Term normalization shared by the measures.

/// Normalizes a term for comparison by lowercasing and replacing separators with spaces.
pub fn normalize_term(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized term with all whitespace removed ("Web Server" == "WebServer").
pub fn squash_term(raw: &str) -> String {
    normalize_term(raw).replace(' ', "")
}

pub(crate) fn check_threshold(
    component: &'static str,
    threshold: f64,
) -> crate::error::Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(crate::error::SimilarityError::invalid(
            component,
            format!("threshold {threshold} must lie in [0, 1]"),
        ))
    }
}
