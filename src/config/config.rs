use std::env;
use std::fs;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_FILE, DEFAULT_API_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_FILE,
    DEFAULT_TIMEOUT_SECS, ORGANIZATION_ENV_VAR, PAT_ENV_VAR, PROJECT_ENV_VAR,
};
use crate::error::{OutlineError, OutlineResult};
use crate::outline_error;

/// What to do when the same work item id is fetched twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Abort,
    Skip,
}

/// Whether a relation's source id is recorded as the parent of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParentLinking {
    #[default]
    Relations,
    /// Never record a parent; every fetched item becomes a root.
    Flat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub organization: Option<String>,
    pub project: Option<String>,
    pub pat: Option<String>,
    pub api_base_url: String,
    pub output: PathBuf,
    pub concurrency: usize,
    pub timeout_secs: u64,
    pub on_duplicate: DuplicatePolicy,
    pub parent_linking: ParentLinking,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            organization: None,
            project: None,
            pat: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            on_duplicate: DuplicatePolicy::default(),
            parent_linking: ParentLinking::default(),
        }
    }
}

impl Config {
    /// Overlay organization, project and token from the environment.
    pub fn apply_env(&mut self) {
        if let Ok(org) = env::var(ORGANIZATION_ENV_VAR) {
            if !org.trim().is_empty() {
                self.organization = Some(org);
            }
        }
        if let Ok(project) = env::var(PROJECT_ENV_VAR) {
            if !project.trim().is_empty() {
                self.project = Some(project);
            }
        }
        if let Ok(pat) = env::var(PAT_ENV_VAR) {
            if !pat.trim().is_empty() {
                self.pat = Some(pat);
            }
        }
    }

    pub fn validate(&self) -> OutlineResult<()> {
        if self.organization.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err(outline_error!(
                ConfigError,
                "organization is not set (use --org or {})",
                ORGANIZATION_ENV_VAR
            ));
        }
        if self.project.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err(outline_error!(
                ConfigError,
                "project is not set (use --project or {})",
                PROJECT_ENV_VAR
            ));
        }
        if self.concurrency == 0 {
            return Err(outline_error!(ConfigError, "concurrency must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(outline_error!(ConfigError, "timeout must be at least 1 second"));
        }
        Ok(())
    }

    pub fn organization(&self) -> &str {
        self.organization.as_deref().unwrap_or_default()
    }

    pub fn project(&self) -> &str {
        self.project.as_deref().unwrap_or_default()
    }
}

pub fn config_path() -> OutlineResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| OutlineError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> OutlineResult<Config> {
    let config_path = config_path()?;

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)?;
        serde_json::from_str(&config_str).map_err(|e| {
            OutlineError::ConfigError(format!("{}: {}", config_path.display(), e))
        })
    } else {
        Ok(Config::default())
    }
}

pub fn save_config(config: &Config) -> OutlineResult<()> {
    let config_path = config_path()?;

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

pub fn get_pat_token(config: &Config) -> OutlineResult<String> {
    // First check environment variable
    if let Ok(token) = env::var(PAT_ENV_VAR) {
        if !token.trim().is_empty() {
            return Ok(token);
        }
    }

    // Then the loaded config
    config
        .pat
        .clone()
        .filter(|token| !token.trim().is_empty())
        .ok_or(OutlineError::TokenNotFound)
}
