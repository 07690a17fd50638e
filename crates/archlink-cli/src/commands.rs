use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use archlink_config::ArchlinkConfig;
use archlink_recommend::{default_agent_registry, default_extractor_registry};
use archlink_similarity::registry::{default_measure_registry, default_strategy_registry};

use archlink_cli::pipeline::recommend_file;
use archlink_cli::report::RecommendationReport;

use crate::cli::RecommendArgs;
use crate::summary::apply_table_style;

pub fn run_recommend(args: &RecommendArgs) -> Result<RecommendationReport> {
    let span = info_span!("recommend", document = %args.document.display());
    let _guard = span.enter();
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = ArchlinkConfig::discover(args.config.as_deref(), &cwd).context("load config")?;
    recommend_file(&args.document, &config)
}

pub fn run_measures() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Id"]);
    apply_table_style(&mut table);
    let rows = [
        ("measure", default_measure_registry().ids().collect::<Vec<_>>()),
        ("strategy", default_strategy_registry().ids().collect()),
        ("agent", default_agent_registry().ids().collect()),
        ("extractor", default_extractor_registry().ids().collect()),
    ];
    for (kind, ids) in rows {
        for id in ids {
            table.add_row(vec![kind, id]);
        }
    }
    println!("{table}");
    Ok(())
}
