use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::WorkItemRelation;

#[derive(Debug, Serialize)]
pub struct WiqlRequest<'a> {
    pub query: &'a str,
}

// WIQL data structures
#[derive(Debug, Deserialize)]
pub struct WiqlResponse {
    #[serde(rename = "workItemRelations", default)]
    pub work_item_relations: Vec<WiqlRelation>,
}

#[derive(Debug, Deserialize)]
pub struct WiqlRelation {
    pub source: Option<WorkItemReference>,
    pub target: WorkItemReference,
}

#[derive(Debug, Deserialize)]
pub struct WorkItemReference {
    pub id: u32,
}

impl From<WiqlRelation> for WorkItemRelation {
    fn from(relation: WiqlRelation) -> Self {
        WorkItemRelation::new(relation.source.map(|s| s.id), relation.target.id)
    }
}

impl WiqlResponse {
    pub fn into_relations(self) -> Vec<WorkItemRelation> {
        self.work_item_relations.into_iter().map(Into::into).collect()
    }
}

// Work item data structures
#[derive(Debug, Deserialize)]
pub struct WorkItemResponse {
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl WorkItemResponse {
    /// String value of a field, if present and a string.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relations_keep_order_and_null_sources() {
        let body = json!({
            "queryType": "tree",
            "workItemRelations": [
                {"rel": null, "source": null, "target": {"id": 10, "url": "x"}},
                {"rel": "System.LinkTypes.Hierarchy-Forward", "source": {"id": 10}, "target": {"id": 11}},
                {"rel": "System.LinkTypes.Hierarchy-Forward", "source": {"id": 11}, "target": {"id": 12}}
            ]
        });

        let response: WiqlResponse = serde_json::from_value(body).unwrap();
        let relations = response.into_relations();

        assert_eq!(
            relations,
            vec![
                WorkItemRelation::new(None, 10),
                WorkItemRelation::new(Some(10), 11),
                WorkItemRelation::new(Some(11), 12),
            ]
        );
    }

    #[test]
    fn test_missing_relations_list_is_empty() {
        let response: WiqlResponse = serde_json::from_value(json!({"workItems": []})).unwrap();
        assert!(response.into_relations().is_empty());
    }

    #[test]
    fn test_field_lookup_ignores_non_strings() {
        let response: WorkItemResponse = serde_json::from_value(json!({
            "id": 5,
            "fields": {"System.Title": "Login", "System.Rev": 3}
        }))
        .unwrap();

        assert_eq!(response.field("System.Title"), Some("Login"));
        assert_eq!(response.field("System.Rev"), None);
        assert_eq!(response.field("System.Description"), None);
    }
}
