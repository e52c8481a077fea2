use serde::{Deserialize, Serialize};

/// A parent to child hierarchy edge. `source` is `None` for the top-level
/// rows of a recursive tree query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemRelation {
    pub source: Option<u32>,
    pub target: u32,
}

impl WorkItemRelation {
    pub fn new(source: Option<u32>, target: u32) -> Self {
        Self { source, target }
    }
}
