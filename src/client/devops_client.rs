use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::config::Config;
use crate::constants::{HIERARCHY_QUERY, WIQL_API_VERSION, WORK_ITEM_API_VERSION};
use crate::error::{OutlineError, OutlineResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::wire::WiqlRequest;
use crate::models::{WiqlResponse, WorkItemDetail, WorkItemRelation, WorkItemResponse};

/// Client for the work item tracking endpoints of one Azure DevOps project.
pub struct DevOpsClient {
    client: reqwest::Client,
    project_url: String,
    pat: String,
}

impl DevOpsClient {
    pub fn new(config: &Config, pat: String) -> OutlineResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let project_url = format!(
            "{}/{}/{}",
            config.api_base_url.trim_end_matches('/'),
            config.organization(),
            config.project()
        );

        Ok(Self {
            client,
            project_url,
            pat,
        })
    }

    pub fn wiql_url(&self) -> String {
        format!("{}/_apis/wit/wiql?api-version={}", self.project_url, WIQL_API_VERSION)
    }

    pub fn work_item_url(&self, id: u32) -> String {
        format!(
            "{}/_apis/wit/workitems/{}?api-version={}",
            self.project_url, id, WORK_ITEM_API_VERSION
        )
    }

    /// Run the hierarchy query. A non-success status is logged and yields
    /// an empty list.
    pub async fn query_relations(&self) -> OutlineResult<Vec<WorkItemRelation>> {
        log_info("Fetching work items...");

        let response = self
            .client
            .post(self.wiql_url())
            .basic_auth("", Some(&self.pat))
            .json(&WiqlRequest { query: HIERARCHY_QUERY })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            log_error(&format!("Failed to fetch work items. Status Code: {}", status.as_u16()));
            log_debug(&format!("WIQL error body: {}", body));
            return Ok(Vec::new());
        }

        let wiql: WiqlResponse = response.json().await?;
        let relations = wiql.into_relations();
        log_info(&format!("Successfully fetched {} work item relations.", relations.len()));

        Ok(relations)
    }

    /// Fetch one work item. `Ok(None)` when the service answers with
    /// anything but 200.
    pub async fn fetch_work_item(&self, id: u32) -> OutlineResult<Option<WorkItemDetail>> {
        let response = self
            .client
            .get(self.work_item_url(id))
            .basic_auth("", Some(&self.pat))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            log_error(&format!("Failed to fetch item details for ID: {}", id));
            log_debug(&format!("Work item {} returned status {}", id, response.status()));
            return Ok(None);
        }

        let item: WorkItemResponse = response
            .json()
            .await
            .map_err(|e| OutlineError::ApiError(format!("Invalid work item {} payload: {}", id, e)))?;

        Ok(Some(WorkItemDetail::from_response(id, &item)))
    }
}
