//! End-to-end tests for the recommend pipeline.

use std::path::PathBuf;

use archlink_cli::pipeline::{build_generator, load_document, recommend, recommend_file};
use archlink_config::ArchlinkConfig;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn shop_report(config: &ArchlinkConfig) -> archlink_cli::report::RecommendationReport {
    recommend_file(&fixture("shop.json"), config).expect("recommend")
}

#[test]
fn shop_report_is_stable() {
    let report = shop_report(&ArchlinkConfig::default());
    insta::assert_snapshot!("shop_report", report.to_text());
}

#[test]
fn json_report_lists_relation_participants() {
    let report = shop_report(&ArchlinkConfig::default());
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["instances"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["instances"][0]["id"], 0);
    assert_eq!(json["instances"][0]["claimants"][0], "name_type");
    assert_eq!(
        json["relations"][0]["participants"],
        serde_json::json!(["Client", "Server", "Database"])
    );
    assert_eq!(
        json["relations"][0]["evidence"],
        serde_json::json!(["Client", ",", "Server", "and", "Database"])
    );
}

#[test]
fn relations_can_be_disabled() {
    let mut config = ArchlinkConfig::default();
    config.recommendation.agents = vec!["initial_recommendation".to_string()];
    let report = shop_report(&config);
    assert_eq!(report.instances.len(), 3);
    assert!(report.relations.is_empty());
}

#[test]
fn generator_is_reusable_across_documents() {
    let generator = build_generator(&ArchlinkConfig::default()).expect("build generator");
    for _ in 0..2 {
        let document = load_document(&fixture("shop.json")).expect("load document");
        let report = recommend(document, &generator).expect("recommend");
        assert_eq!(report.relations.len(), 1);
    }
}

#[test]
fn unknown_strategy_fails_before_the_document_is_read() {
    let mut config = ArchlinkConfig::default();
    config.similarity.strategy = "unanimous".to_string();
    let error = recommend_file(&fixture("absent.json"), &config).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.starts_with("build recommendation engine"), "{message}");
    assert!(message.contains("unanimous"), "{message}");
}

#[test]
fn missing_document_is_an_error() {
    let error = load_document(&fixture("absent.json")).unwrap_err();
    assert!(error.to_string().starts_with("read document"));
}
