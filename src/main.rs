use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, Command};

use wit_outline::commands::{handle_auth, handle_outline, handle_relations};
use wit_outline::logging::{get_log_file_path, init_logging, is_quiet, log_error, log_panic_info, set_quiet};

fn project_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("org")
                .long("org")
                .value_name("ORGANIZATION")
                .help("Azure DevOps organization (overrides AZURE_DEVOPS_ORG)")
        )
        .arg(
            Arg::new("project")
                .long("project")
                .value_name("PROJECT")
                .help("Azure DevOps project (overrides AZURE_DEVOPS_PROJECT)")
        )
}

fn cli() -> Command {
    Command::new("wit-outline")
        .about("Export an Azure DevOps Module/Epic/Feature hierarchy as a text outline")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .help("Only write to the log file, not the console")
                .action(ArgAction::SetTrue)
        )
        .subcommand(
            project_args(Command::new("outline"))
                .about("Fetch the hierarchy and write the outline file")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output file (default: work_items_hierarchy.txt)")
                        .value_parser(value_parser!(PathBuf))
                )
                .arg(
                    Arg::new("concurrency")
                        .long("concurrency")
                        .short('c')
                        .value_name("N")
                        .help("Maximum concurrent detail requests")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .value_name("SECONDS")
                        .help("Per-request timeout in seconds")
                        .value_parser(value_parser!(u64))
                )
                .arg(
                    Arg::new("flat")
                        .long("flat")
                        .help("Do not link items to their parents; every item is a root")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("skip-duplicates")
                        .long("skip-duplicates")
                        .help("Log and skip duplicate work items instead of aborting")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Print the outline instead of writing the file")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            project_args(Command::new("relations"))
                .about("List the hierarchy relations returned by the query")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: table or json")
                        .value_parser(["table", "json"])
                        .default_value("table")
                )
        )
        .subcommand(
            Command::new("auth")
                .about("Store or show the personal access token")
                .arg(
                    Arg::new("pat")
                        .long("pat")
                        .value_name("TOKEN")
                        .help("Save a personal access token")
                        .required(false)
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current token, masked")
                        .action(ArgAction::SetTrue)
                )
        )
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
        eprintln!("{}", info);
    }));

    let matches = cli().get_matches();
    set_quiet(matches.get_flag("quiet"));

    if let Err(e) = init_logging() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let result = match matches.subcommand() {
        Some(("outline", sub_matches)) => handle_outline(sub_matches).await,
        Some(("relations", sub_matches)) => handle_relations(sub_matches).await,
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'wit-outline --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&format!("Error: {}", e));
        if is_quiet() {
            eprintln!("Error: {}", e);
        }
        if let Some(path) = get_log_file_path() {
            eprintln!("Details were logged to {}", path.display());
        }
        process::exit(1);
    }
}
