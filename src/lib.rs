// Module declarations
pub mod cleaning;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod fetch;
pub mod formatting;
pub mod hierarchy;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::DevOpsClient;
pub use config::{Config, DuplicatePolicy, ParentLinking, get_pat_token, load_config, save_config};
pub use error::{OutlineError, OutlineResult};
pub use models::*;
