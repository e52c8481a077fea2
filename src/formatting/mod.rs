pub mod outline;
pub mod relations;

pub use outline::{render_outline, write_outline};
pub use relations::print_relations;
