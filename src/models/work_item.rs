use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cleaning::clean_description;
use crate::constants::{
    FIELD_DESCRIPTION, FIELD_TITLE, FIELD_WORK_ITEM_TYPE, NO_DESCRIPTION, NO_TITLE, UNKNOWN_TYPE,
};

use super::WorkItemResponse;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkItemKind {
    Module,
    Epic,
    Feature,
    Other(String),
}

impl WorkItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            WorkItemKind::Module => "Module",
            WorkItemKind::Epic => "Epic",
            WorkItemKind::Feature => "Feature",
            WorkItemKind::Other(label) => label,
        }
    }

    /// Module, Epic and Feature are the kinds that appear in the outline.
    pub fn is_outlined(&self) -> bool {
        !matches!(self, WorkItemKind::Other(_))
    }
}

impl From<&str> for WorkItemKind {
    fn from(label: &str) -> Self {
        match label {
            "Module" => WorkItemKind::Module,
            "Epic" => WorkItemKind::Epic,
            "Feature" => WorkItemKind::Feature,
            other => WorkItemKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for WorkItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WorkItemKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkItemKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(WorkItemKind::from(label.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemDetail {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: WorkItemKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub children: Vec<WorkItemDetail>,
}

impl WorkItemDetail {
    pub fn new(id: u32, title: &str, kind: WorkItemKind, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            kind,
            description: description.to_string(),
            parent_id: None,
            children: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: Option<u32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// Build a detail from a work item response, cleaning the description
    /// and substituting placeholders for missing fields.
    pub fn from_response(id: u32, response: &WorkItemResponse) -> Self {
        let title = response.field(FIELD_TITLE).unwrap_or(NO_TITLE);
        let kind = WorkItemKind::from(response.field(FIELD_WORK_ITEM_TYPE).unwrap_or(UNKNOWN_TYPE));
        let description = clean_description(response.field(FIELD_DESCRIPTION).unwrap_or(NO_DESCRIPTION));

        Self {
            id,
            title: title.to_string(),
            kind,
            description,
            parent_id: None,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_round_trips_labels() {
        assert_eq!(WorkItemKind::from("Epic"), WorkItemKind::Epic);
        assert_eq!(WorkItemKind::from("Bug").to_string(), "Bug");
        assert!(WorkItemKind::Module.is_outlined());
        assert!(!WorkItemKind::from("User Story").is_outlined());
    }

    #[test]
    fn test_from_response_cleans_description() {
        let response: WorkItemResponse = serde_json::from_value(json!({
            "fields": {
                "System.Title": "Checkout",
                "System.WorkItemType": "Feature",
                "System.Description": "<div>Pay <b>now</b></div><p>See https://example.com/spec</p>"
            }
        }))
        .unwrap();

        let detail = WorkItemDetail::from_response(7, &response);
        assert_eq!(detail.id, 7);
        assert_eq!(detail.title, "Checkout");
        assert_eq!(detail.kind, WorkItemKind::Feature);
        assert_eq!(detail.description, "Pay now See ");
        assert!(detail.children.is_empty());
        assert_eq!(detail.parent_id, None);
    }

    #[test]
    fn test_from_response_uses_placeholders() {
        let response: WorkItemResponse = serde_json::from_value(json!({"fields": {}})).unwrap();

        let detail = WorkItemDetail::from_response(3, &response);
        assert_eq!(detail.title, NO_TITLE);
        assert_eq!(detail.kind, WorkItemKind::Other(UNKNOWN_TYPE.to_string()));
        assert_eq!(detail.description, NO_DESCRIPTION);
    }
}
