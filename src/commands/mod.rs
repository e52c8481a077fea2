pub mod auth;
pub mod outline;
pub mod relations;

pub use auth::handle_auth;
pub use outline::handle_outline;
pub use relations::handle_relations;

use clap::ArgMatches;

use crate::cli_context::{CliContext, CliContextBuilder};
use crate::error::OutlineResult;

/// Load the context, applying `--org` and `--project` when given.
pub fn project_context(matches: &ArgMatches) -> OutlineResult<CliContext> {
    let mut builder = CliContextBuilder::new();

    if let Some(org) = matches.get_one::<String>("org") {
        builder = builder.with_organization(org);
    }
    if let Some(project) = matches.get_one::<String>("project") {
        builder = builder.with_project(project);
    }

    builder.build()
}
