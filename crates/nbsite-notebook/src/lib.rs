//! Notebook "freezing" for nbsite.
//!
//! The site build executes notebooks unless a cell carries the `no-execute`
//! tag. Freezing a notebook tags every cell so its committed outputs are
//! published as-is:
//!
//! - read the `.ipynb` JSON fully into memory,
//! - ensure `metadata.tags` of every cell contains [`NO_EXECUTE_TAG`],
//! - write the whole document back (in place or to another path).
//!
//! Nothing is written until the document has been parsed, tagged and rendered.
//! The target is then overwritten in place, so an in-place freeze keeps the
//! file's identity (inode, birth time, permissions) and follows symlinks.

mod error;
mod format;
mod tag;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

pub use error::{NotebookError, Result};
pub use format::to_notebook_json;
pub use tag::{tag_cells, TagReport, NO_EXECUTE_TAG};

/// Options for [`add_no_execute_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOptions {
    /// Escape non-ASCII characters as `\uXXXX` (default: `true`).
    pub ensure_ascii: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self { ensure_ascii: true }
    }
}

/// Result of freezing one notebook file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    /// Path the document was written to.
    pub output: PathBuf,
    pub report: TagReport,
}

/// Tag every cell of the notebook at `input` with [`NO_EXECUTE_TAG`].
///
/// The result goes to `output`, or back to `input` when `output` is `None`.
/// Fails with [`NotebookError::FileNotFound`] before reading anything when
/// `input` is not an existing file.
pub fn add_no_execute_tag(input: &Path, output: Option<&Path>, options: &TagOptions) -> Result<TagOutcome> {
    if !input.is_file() {
        return Err(NotebookError::FileNotFound(input.to_path_buf()));
    }

    let text = fs::read_to_string(input)?;
    let mut document: Value = serde_json::from_str(&text).map_err(|source| NotebookError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    let report = tag_cells(&mut document, NO_EXECUTE_TAG)?;
    let rendered = to_notebook_json(&document, options.ensure_ascii)?;

    let output = output.unwrap_or(input).to_path_buf();
    fs::write(&output, rendered)?;
    tracing::info!(
        path = %output.display(),
        cells = report.cells,
        tagged = report.tagged,
        "wrote notebook"
    );

    Ok(TagOutcome { output, report })
}
