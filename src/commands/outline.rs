use std::path::PathBuf;

use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::commands::project_context;
use crate::config::{DuplicatePolicy, ParentLinking};
use crate::error::{OutlineError, OutlineResult};
use crate::export::{collect_hierarchy, export_outline};
use crate::formatting::render_outline;
use crate::logging::{is_quiet, log_debug};

pub async fn handle_outline(matches: &ArgMatches) -> OutlineResult<()> {
    let mut context = project_context(matches)?;
    apply_overrides(&mut context, matches);

    let client = context.verified_client()?;
    let config = context.config().clone();
    log_debug(&format!(
        "Resolved configuration: org={} project={} concurrency={} timeout={}s",
        config.organization(),
        config.project(),
        config.concurrency,
        config.timeout_secs
    ));

    if matches.get_flag("stdout") {
        let (roots, _) = with_interrupt(collect_hierarchy(&client, &config)).await?;
        print!("{}", render_outline(&roots, 0));
        return Ok(());
    }

    let summary = with_interrupt(export_outline(&client, &config)).await?;

    if !is_quiet() {
        println!(
            "{} {} relations, {} items fetched, {} in tree under {} roots",
            "✓".green(),
            summary.relations,
            summary.fetched,
            summary.in_tree,
            summary.roots
        );
    }

    Ok(())
}

fn apply_overrides(context: &mut CliContext, matches: &ArgMatches) {
    let config = context.config_mut();

    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }
    if let Some(concurrency) = matches.get_one::<usize>("concurrency") {
        config.concurrency = *concurrency;
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config.timeout_secs = *timeout;
    }
    if matches.get_flag("flat") {
        config.parent_linking = ParentLinking::Flat;
    }
    if matches.get_flag("skip-duplicates") {
        config.on_duplicate = DuplicatePolicy::Skip;
    }
}

/// Run `task` unless Ctrl-C arrives first.
async fn with_interrupt<T>(
    task: impl std::future::Future<Output = OutlineResult<T>>,
) -> OutlineResult<T> {
    tokio::select! {
        result = task => result,
        _ = tokio::signal::ctrl_c() => Err(OutlineError::Interrupted),
    }
}
