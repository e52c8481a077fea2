use std::sync::Arc;

use crate::client::DevOpsClient;
use crate::config::{get_pat_token, load_config, save_config, Config};
use crate::error::OutlineResult;
use crate::outline_error;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    config: Config,
    client: Option<Arc<DevOpsClient>>,
}

impl CliContext {
    /// Create a context around an already resolved configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Load context from `.env`, the saved configuration and the environment
    pub fn load() -> OutlineResult<Self> {
        let _ = dotenvy::dotenv();

        let mut config = load_config()?;
        config.apply_env();

        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access for command-line overrides. Drops any cached client.
    pub fn config_mut(&mut self) -> &mut Config {
        self.client = None;
        &mut self.config
    }

    /// Get or create a client for the configured project (requires a token)
    pub fn verified_client(&mut self) -> OutlineResult<Arc<DevOpsClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        self.config.validate()?;
        let pat = self.pat_token()?;
        let client = Arc::new(DevOpsClient::new(&self.config, pat)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// The personal access token, preferring the resolved configuration
    pub fn pat_token(&self) -> OutlineResult<String> {
        match self.config.pat.as_ref().filter(|token| !token.trim().is_empty()) {
            Some(token) => Ok(token.clone()),
            None => get_pat_token(&self.config),
        }
    }

    /// Set and save a new personal access token
    pub fn set_pat_token(&mut self, token: String) -> OutlineResult<()> {
        if token.trim().is_empty() {
            return Err(outline_error!(InvalidInput, "token must not be empty"));
        }

        let mut saved = load_config()?;
        saved.pat = Some(token.clone());
        save_config(&saved)?;

        self.config.pat = Some(token);
        self.client = None;
        Ok(())
    }

    /// Check if context has a usable token
    pub fn has_pat_token(&self) -> bool {
        self.pat_token().is_ok()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    config: Option<Config>,
    pat: Option<String>,
    organization: Option<String>,
    project: Option<String>,
    api_base_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            pat: None,
            organization: None,
            project: None,
            api_base_url: None,
        }
    }

    /// Start from this configuration instead of loading the saved one
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_pat(mut self, pat: String) -> Self {
        self.pat = Some(pat);
        self
    }

    pub fn with_organization(mut self, organization: &str) -> Self {
        self.organization = Some(organization.to_string());
        self
    }

    pub fn with_project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> OutlineResult<CliContext> {
        let mut context = match self.config {
            Some(config) => CliContext::new(config),
            None => CliContext::load()?,
        };

        let config = context.config_mut();
        if let Some(pat) = self.pat {
            config.pat = Some(pat);
        }
        if let Some(organization) = self.organization {
            config.organization = Some(organization);
        }
        if let Some(project) = self.project {
            config.project = Some(project);
        }
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }

        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
