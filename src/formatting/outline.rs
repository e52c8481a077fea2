use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::OutlineResult;
use crate::models::{WorkItemDetail, WorkItemKind};

/// Render items depth-first, one line per Module, Epic or Feature.
///
/// Each line is indented by one space per level. Features carry their
/// description after ` - `, and every Module line is preceded by a blank
/// line. Items of any other kind print nothing but their children are still
/// rendered, one level deeper.
pub fn render_outline(items: &[WorkItemDetail], level: usize) -> String {
    let mut out = String::new();
    write_items(&mut out, items, level);
    out
}

fn write_items(out: &mut String, items: &[WorkItemDetail], level: usize) {
    for item in items {
        if item.kind.is_outlined() {
            if item.kind == WorkItemKind::Module {
                out.push('\n');
            }

            let _ = write!(out, "{}{}: {}: {}", " ".repeat(level), item.id, item.kind, item.title);
            if item.kind == WorkItemKind::Feature {
                let _ = write!(out, " - {}", item.description);
            }
            out.push('\n');
        }

        write_items(out, &item.children, level + 1);
    }
}

/// Render the outline and write it to `path`, replacing any existing file.
pub fn write_outline(path: &Path, roots: &[WorkItemDetail]) -> OutlineResult<()> {
    fs::write(path, render_outline(roots, 0))?;
    Ok(())
}
