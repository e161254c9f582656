//! In-memory cell tagging.
//!
//! The document stays a `serde_json::Value` so that every field we do not
//! touch (outputs, execution counts, unknown keys) survives byte-for-byte in
//! its original position. Missing `metadata` / `tags` are default-constructed
//! through `Map::entry`, which appends them at the end of their parent object.

use serde_json::{Map, Value};

use crate::error::{NotebookError, Result};

/// Tag that excludes a cell from automated execution.
pub const NO_EXECUTE_TAG: &str = "no-execute";

/// What a tagging pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagReport {
    /// Number of cells visited.
    pub cells: usize,
    /// Number of cells that did not carry the tag before the pass.
    pub tagged: usize,
}

/// Ensure every cell of `document` lists `tag` in `metadata.tags`.
///
/// A document without `cells` (or with `cells: null`) is left untouched.
pub fn tag_cells(document: &mut Value, tag: &str) -> Result<TagReport> {
    let root = document
        .as_object_mut()
        .ok_or(NotebookError::RootNotObject)?;

    let cells = match root.get_mut("cells") {
        None | Some(Value::Null) => return Ok(TagReport::default()),
        Some(Value::Array(cells)) => cells,
        Some(_) => return Err(NotebookError::CellsNotArray),
    };

    let mut report = TagReport::default();
    for (index, cell) in cells.iter_mut().enumerate() {
        let cell = cell.as_object_mut().ok_or(NotebookError::MalformedCell {
            index,
            reason: "cell is not an object",
        })?;
        let added =
            ensure_tag(cell, tag).map_err(|reason| NotebookError::MalformedCell { index, reason })?;
        report.cells += 1;
        if added {
            report.tagged += 1;
        }
    }
    Ok(report)
}

/// Returns `Ok(true)` when the tag had to be appended.
fn ensure_tag(cell: &mut Map<String, Value>, tag: &str) -> std::result::Result<bool, &'static str> {
    let metadata = cell
        .entry("metadata")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or("`metadata` is not an object")?;

    let tags = metadata
        .entry("tags")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or("`metadata.tags` is not an array")?;

    if tags.iter().any(|t| t.as_str() == Some(tag)) {
        return Ok(false);
    }
    tags.push(Value::String(tag.to_string()));
    Ok(true)
}
