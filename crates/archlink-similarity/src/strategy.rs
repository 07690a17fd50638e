//! Strategies combining several measure verdicts into one decision.
//!
//! A strategy only ever looks at the measures it is handed; an empty list is
//! never similar.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::context::ComparisonContext;
use crate::measures::WordSimMeasure;

pub trait ComparisonStrategy: Send + Sync + fmt::Debug {
    /// Registry id of the strategy (e.g. "at_least_one").
    fn id(&self) -> &'static str;

    fn are_words_similar(
        &self,
        ctx: &ComparisonContext<'_>,
        measures: &[Arc<dyn WordSimMeasure>],
    ) -> bool;
}

/// Similar iff any measure reports similar.
///
/// All measures are evaluated so every verdict shows up in the trace log.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtLeastOneStrategy;

impl ComparisonStrategy for AtLeastOneStrategy {
    fn id(&self) -> &'static str {
        "at_least_one"
    }

    fn are_words_similar(
        &self,
        ctx: &ComparisonContext<'_>,
        measures: &[Arc<dyn WordSimMeasure>],
    ) -> bool {
        let similar_count = count_similar(ctx, measures);
        let result = similar_count > 0;
        record_result(self.id(), ctx, result);
        result
    }
}

/// Similar iff strictly more than half of the measures report similar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorityStrategy;

impl ComparisonStrategy for MajorityStrategy {
    fn id(&self) -> &'static str {
        "majority"
    }

    fn are_words_similar(
        &self,
        ctx: &ComparisonContext<'_>,
        measures: &[Arc<dyn WordSimMeasure>],
    ) -> bool {
        let similar_count = count_similar(ctx, measures);
        let result = similar_count * 2 > measures.len();
        record_result(self.id(), ctx, result);
        result
    }
}

/// Similar iff every measure reports similar (and there is at least one).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsensusStrategy;

impl ComparisonStrategy for ConsensusStrategy {
    fn id(&self) -> &'static str {
        "consensus"
    }

    fn are_words_similar(
        &self,
        ctx: &ComparisonContext<'_>,
        measures: &[Arc<dyn WordSimMeasure>],
    ) -> bool {
        let similar_count = count_similar(ctx, measures);
        let result = !measures.is_empty() && similar_count == measures.len();
        record_result(self.id(), ctx, result);
        result
    }
}

fn count_similar(ctx: &ComparisonContext<'_>, measures: &[Arc<dyn WordSimMeasure>]) -> usize {
    measures
        .iter()
        .filter(|measure| {
            let similar = measure.are_words_similar(ctx);
            trace!(
                first = ctx.first_term(),
                second = ctx.second_term(),
                measure = measure.id(),
                similar,
                "measure verdict"
            );
            similar
        })
        .count()
}

fn record_result(strategy: &'static str, ctx: &ComparisonContext<'_>, result: bool) {
    trace!(
        first = ctx.first_term(),
        second = ctx.second_term(),
        strategy,
        result,
        "comparison result"
    );
}
