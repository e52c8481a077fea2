use std::collections::HashMap;

use super::WorkItemDetail;

/// Work item details keyed by id, remembering the order ids were first
/// inserted so the outline follows the query's ordering.
#[derive(Debug, Default, Clone)]
pub struct WorkItemMap {
    order: Vec<u32>,
    items: HashMap<u32, WorkItemDetail>,
}

impl WorkItemMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detail. If its id is already present the map is unchanged
    /// and the rejected detail is handed back.
    pub fn insert(&mut self, detail: WorkItemDetail) -> Option<WorkItemDetail> {
        if self.items.contains_key(&detail.id) {
            return Some(detail);
        }
        self.order.push(detail.id);
        self.items.insert(detail.id, detail);
        None
    }

    pub fn get(&self, id: u32) -> Option<&WorkItemDetail> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }

    /// Consume the map, yielding details in insertion order.
    pub fn into_ordered(mut self) -> Vec<WorkItemDetail> {
        self.order
            .iter()
            .filter_map(|id| self.items.remove(id))
            .collect()
    }
}

impl FromIterator<WorkItemDetail> for WorkItemMap {
    fn from_iter<I: IntoIterator<Item = WorkItemDetail>>(iter: I) -> Self {
        let mut map = WorkItemMap::new();
        for detail in iter {
            map.insert(detail);
        }
        map
    }
}
