//! nbsite command-line tools.
//!
//! Two independent binaries share this crate:
//! - `freeze-notebook`: tag every notebook cell with `no-execute`
//! - `generate-sidebar`: regenerate the year-grouped sidebar script

pub mod freeze;
pub mod logging;
pub mod sidebar;
