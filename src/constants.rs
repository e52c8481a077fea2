pub const DEFAULT_API_BASE_URL: &str = "https://dev.azure.com";
pub const CONFIG_FILE: &str = ".wit-outline-config.json";
pub const DEFAULT_OUTPUT_FILE: &str = "work_items_hierarchy.txt";

pub const WIQL_API_VERSION: &str = "7.1-preview.2";
pub const WORK_ITEM_API_VERSION: &str = "7.1-preview.3";

// Environment variables
pub const PAT_ENV_VAR: &str = "pat";
pub const ORGANIZATION_ENV_VAR: &str = "AZURE_DEVOPS_ORG";
pub const PROJECT_ENV_VAR: &str = "AZURE_DEVOPS_PROJECT";

pub const DEFAULT_CONCURRENCY: usize = 16;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Work item field names
pub const FIELD_TITLE: &str = "System.Title";
pub const FIELD_WORK_ITEM_TYPE: &str = "System.WorkItemType";
pub const FIELD_DESCRIPTION: &str = "System.Description";

pub const NO_TITLE: &str = "No Title";
pub const NO_DESCRIPTION: &str = "No Description";
pub const UNKNOWN_TYPE: &str = "Unknown";

// Features, Epics and Modules linked by forward hierarchy edges, as a tree
pub const HIERARCHY_QUERY: &str = r#"
SELECT
  [System.Id],
  [System.Title],
  [System.WorkItemType],
  [System.Description],
  [System.IterationPath],
  [System.AreaPath]
FROM WorkItemLinks
WHERE
  [Source].[System.TeamProject] = @project
  AND (
    [Source].[System.WorkItemType] = 'Feature'
    OR [Source].[System.WorkItemType] = 'Epic'
    OR [Source].[System.WorkItemType] = 'Module'
  )
  AND
  [System.Links.LinkType] = 'System.LinkTypes.Hierarchy-Forward'
ORDER BY [System.AreaPath], [System.IterationPath], [System.WorkItemType], [System.Title]
MODE (Recursive)
"#;
