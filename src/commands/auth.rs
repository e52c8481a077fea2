use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::OutlineResult;

pub async fn handle_auth(matches: &ArgMatches) -> OutlineResult<()> {
    let mut context = CliContext::load()?;

    if let Some(token) = matches.get_one::<String>("pat") {
        context.set_pat_token(token.clone())?;
        println!("Personal access token saved successfully!");

        // Test the token if the project is known
        if context.config().validate().is_ok() {
            let client = context.verified_client()?;
            match client.query_relations().await {
                Ok(relations) => println!("✅ Connected, {} relations visible", relations.len()),
                Err(e) => println!("❌ Failed to reach the project: {}", e),
            }
        }
    } else if matches.get_flag("show") {
        if context.has_pat_token() {
            let token = context.pat_token()?;
            println!("Token: {}", mask_token(&token));
        } else {
            println!("No personal access token configured");
        }
    } else {
        println!("Usage: wit-outline auth --pat <TOKEN> or wit-outline auth --show");
    }
    Ok(())
}

/// Keep only the first and last four characters of a token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
