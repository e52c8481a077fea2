use clap::ArgMatches;

use crate::commands::project_context;
use crate::error::{ErrorContext, OutlineResult};
use crate::formatting::print_relations;

pub async fn handle_relations(matches: &ArgMatches) -> OutlineResult<()> {
    let mut context = project_context(matches)
        .context("Failed to load CLI context")?;

    let client = context.verified_client()?;
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("table");

    let relations = client.query_relations().await?;
    print_relations(&relations, format)
}
