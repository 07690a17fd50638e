use crate::context::ComparisonContext;
use crate::measures::WordSimMeasure;
use crate::utils::{normalize_term, squash_term};

/// Similar iff both terms are equal after normalization.
///
/// Case, surrounding whitespace and `_ - . /` separators are ignored, so
/// "Web_Server", "web server" and "WebServer" are all equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualityMeasure;

impl WordSimMeasure for EqualityMeasure {
    fn id(&self) -> &'static str {
        "equality"
    }

    fn are_words_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        let first = normalize_term(ctx.first_term());
        let second = normalize_term(ctx.second_term());
        first == second || squash_term(&first) == squash_term(&second)
    }
}
