pub mod relation;
pub mod wire;
pub mod work_item;
pub mod work_item_map;

// Re-export commonly used types
pub use relation::WorkItemRelation;
pub use wire::{WiqlResponse, WorkItemResponse};
pub use work_item::{WorkItemDetail, WorkItemKind};
pub use work_item_map::WorkItemMap;
