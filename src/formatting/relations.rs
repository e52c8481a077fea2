use colored::*;

use crate::error::OutlineResult;
use crate::models::WorkItemRelation;

pub fn print_relations(relations: &[WorkItemRelation], format: &str) -> OutlineResult<()> {
    if relations.is_empty() {
        println!("{}", "No work item relations found.".dimmed());
        return Ok(());
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(relations)?;
            println!("{}", json);
        }
        _ => {
            println!("{}", "─".repeat(30).dimmed());
            println!("{:<12} {:<12}", "Source".bold(), "Target".bold());
            println!("{}", "─".repeat(30).dimmed());

            for relation in relations {
                let source = match relation.source {
                    Some(id) => id.to_string().normal(),
                    None => "(root)".dimmed(),
                };
                println!("{:<12} {:<12}", source, relation.target.to_string().cyan());
            }
        }
    }

    Ok(())
}
