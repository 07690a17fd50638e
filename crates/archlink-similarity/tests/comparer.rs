//! Integration tests for configuring and using the term comparer.

use std::sync::Arc;

use archlink_similarity::measures::JaroWinklerMeasure;
use archlink_similarity::{
    AtLeastOneStrategy, ComparisonContext, ComparisonStrategy, SimilarityConfig, SimilarityError,
    TermComparer, WordSimMeasure,
};
use proptest::prelude::*;

#[test]
fn default_config_matches_misspellings() {
    let comparer = TermComparer::from_config(&SimilarityConfig::default()).unwrap();
    assert_eq!(comparer.measure_ids(), vec!["equality", "jaro_winkler"]);
    assert_eq!(comparer.strategy_id(), "at_least_one");
    assert!(comparer.are_words_similar("Authentification", "Authentication"));
    assert!(!comparer.are_words_similar("Authentication", "Database"));
}

#[test]
fn config_parses_from_toml() {
    let config: SimilarityConfig = toml::from_str(
        r#"
        measures = ["ngram", "dictionary"]
        strategy = "majority"

        [ngram]
        n = 3
        threshold = 0.6

        [dictionary]
        synonyms = [["Database", "DB"]]
        "#,
    )
    .unwrap();
    assert_eq!(config.ngram.n, 3);
    // unspecified sections keep their defaults
    assert_eq!(config.jaro_winkler.threshold, 0.85);

    let comparer = TermComparer::from_config(&config).unwrap();
    assert_eq!(comparer.measure_ids(), vec!["ngram", "dictionary"]);
    // only one of two measures agrees: no majority
    assert!(!comparer.are_words_similar("Database", "DB"));
}

#[test]
fn unknown_measure_fails_at_construction() {
    let config = SimilarityConfig::default().with_measures(["equality", "soundex"]);
    let err = TermComparer::from_config(&config).unwrap_err();
    assert_eq!(
        err,
        SimilarityError::UnknownMeasure {
            name: "soundex".to_string()
        }
    );
}

#[test]
fn unknown_strategy_fails_at_construction() {
    let config = SimilarityConfig::default().with_strategy("weighted");
    assert!(matches!(
        TermComparer::from_config(&config),
        Err(SimilarityError::UnknownStrategy { name }) if name == "weighted"
    ));
}

#[test]
fn invalid_parameter_names_the_component() {
    let mut config = SimilarityConfig::default().with_measures(["ngram"]);
    config.ngram.n = 0;
    let err = TermComparer::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        SimilarityError::InvalidParameter {
            component: "ngram",
            ..
        }
    ));
}

#[test]
fn empty_measure_list_never_matches() {
    let config = SimilarityConfig::default().with_measures(Vec::<String>::new());
    let comparer = TermComparer::from_config(&config).unwrap();
    assert!(!comparer.are_words_similar("Database", "Database"));
}

#[derive(Debug)]
struct Fixed(bool);

impl WordSimMeasure for Fixed {
    fn id(&self) -> &'static str {
        "fixed"
    }

    fn are_words_similar(&self, _ctx: &ComparisonContext<'_>) -> bool {
        self.0
    }
}

proptest! {
    #[test]
    fn at_least_one_agrees_with_any(verdicts in proptest::collection::vec(any::<bool>(), 0..8)) {
        let measures: Vec<Arc<dyn WordSimMeasure>> = verdicts
            .iter()
            .map(|&v| Arc::new(Fixed(v)) as Arc<dyn WordSimMeasure>)
            .collect();
        let ctx = ComparisonContext::new("left", "right");
        prop_assert_eq!(
            AtLeastOneStrategy.are_words_similar(&ctx, &measures),
            verdicts.iter().any(|&v| v)
        );
    }

    #[test]
    fn jaro_winkler_stays_in_unit_interval(first in "[a-zA-Z ]{0,12}", second in "[a-zA-Z ]{0,12}") {
        let score = JaroWinklerMeasure::similarity(&first, &second);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }
}
