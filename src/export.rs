use crate::client::DevOpsClient;
use crate::config::Config;
use crate::error::OutlineResult;
use crate::fetch::{fetch_all, FanOutOptions};
use crate::formatting::write_outline;
use crate::hierarchy::{build_hierarchy, count_items};
use crate::logging::log_info;
use crate::models::WorkItemDetail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub relations: usize,
    pub fetched: usize,
    pub roots: usize,
    pub in_tree: usize,
}

/// Query the relations, fetch every target and rebuild the tree.
pub async fn collect_hierarchy(
    client: &DevOpsClient,
    config: &Config,
) -> OutlineResult<(Vec<WorkItemDetail>, ExportSummary)> {
    let relations = client.query_relations().await?;
    let details = fetch_all(client, &relations, FanOutOptions::from(config)).await?;
    let fetched = details.len();

    let roots = build_hierarchy(details);
    let summary = ExportSummary {
        relations: relations.len(),
        fetched,
        roots: roots.len(),
        in_tree: count_items(&roots),
    };

    Ok((roots, summary))
}

/// Collect the hierarchy and write its outline to `config.output`.
/// Nothing is written if collection fails.
pub async fn export_outline(client: &DevOpsClient, config: &Config) -> OutlineResult<ExportSummary> {
    let (roots, summary) = collect_hierarchy(client, config).await?;

    write_outline(&config.output, &roots)?;
    log_info(&format!(
        "Work items hierarchy has been written to {}",
        config.output.display()
    ));

    Ok(summary)
}
