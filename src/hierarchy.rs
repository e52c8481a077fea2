use std::collections::HashMap;

use crate::logging::log_debug;
use crate::models::{WorkItemDetail, WorkItemMap};

/// Rebuild the parent/child tree from fetched details.
///
/// Items without a parent become roots, in input order. Items whose parent
/// was fetched are appended to that parent's children, also in input order.
/// Items whose parent is missing from `details` are dropped.
pub fn build_hierarchy(details: WorkItemMap) -> Vec<WorkItemDetail> {
    let mut root_ids = Vec::new();
    let mut children_of: HashMap<u32, Vec<u32>> = HashMap::new();

    for id in details.ids() {
        let Some(detail) = details.get(id) else {
            continue;
        };
        match detail.parent_id {
            None => root_ids.push(id),
            Some(parent_id) if details.contains(parent_id) => {
                children_of.entry(parent_id).or_default().push(id);
            }
            Some(parent_id) => {
                log_debug(&format!(
                    "Dropping work item {}: parent {} was not fetched",
                    id, parent_id
                ));
            }
        }
    }

    let mut pool: HashMap<u32, WorkItemDetail> = details
        .into_ordered()
        .into_iter()
        .map(|detail| (detail.id, detail))
        .collect();

    let roots: Vec<WorkItemDetail> = root_ids
        .into_iter()
        .filter_map(|id| attach_children(id, &mut pool, &children_of))
        .collect();

    // Anything left was only reachable through a cycle
    for id in pool.keys() {
        log_debug(&format!("Dropping work item {}: not reachable from any root", id));
    }

    roots
}

fn attach_children(
    id: u32,
    pool: &mut HashMap<u32, WorkItemDetail>,
    children_of: &HashMap<u32, Vec<u32>>,
) -> Option<WorkItemDetail> {
    let mut node = pool.remove(&id)?;

    if let Some(child_ids) = children_of.get(&id) {
        for child_id in child_ids {
            if let Some(child) = attach_children(*child_id, pool, children_of) {
                node.children.push(child);
            }
        }
    }

    Some(node)
}

/// Total number of items in a forest.
pub fn count_items(roots: &[WorkItemDetail]) -> usize {
    roots.iter().map(|item| 1 + count_items(&item.children)).sum()
}
