//! Year-grouped sidebar generation for nbsite.
//!
//! The site's sidebar script groups posts under year headings. The grouping
//! is computed at build time:
//!
//! ```text
//! _toc.yml ──► identifiers ──► <id>.ipynb timestamps ──► year groups
//!                                                            │
//! sidebar_template.js ── YEARGROUPS_PLACEHOLDER ◄── literal ─┘
//!          │
//!          ▼
//!     custom.js
//! ```
//!
//! Drafts (`WIP*`) and TOC entries without a notebook on disk are left out.
//! Groups are recomputed from the filesystem on every run; nothing is cached.

mod error;
mod groups;
mod render;
mod template;
mod toc;
mod year;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub use error::{Result, SidebarError};
pub use groups::{
    generate_year_groups, notebook_path, sort_years, SortedYearGroups, YearGroups,
    NOTEBOOK_EXTENSION, WIP_PREFIX,
};
pub use render::{quote_str, render_year_groups, LiteralStyle};
pub use template::{apply_template, YEARGROUPS_PLACEHOLDER};
pub use toc::{parse_toc, parse_toc_str};
pub use year::{FileTimestampYear, TimestampKind, Year, YearSource};

pub const TOC_FILE_NAME: &str = "_toc.yml";
pub const TEMPLATE_RELATIVE_PATH: &str = "_static/js/sidebar_template.js";
pub const OUTPUT_RELATIVE_PATH: &str = "_static/js/custom.js";

/// Where the generator reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarConfig {
    pub toc_file: PathBuf,
    /// Directory holding `<identifier>.ipynb`.
    pub notebook_dir: PathBuf,
    pub template_file: PathBuf,
    pub output_file: PathBuf,
    pub style: LiteralStyle,
}

impl SidebarConfig {
    /// Standard layout of a site rooted at `site_dir`.
    pub fn for_site(site_dir: impl Into<PathBuf>) -> Self {
        let site_dir = site_dir.into();
        Self {
            toc_file: site_dir.join(TOC_FILE_NAME),
            template_file: site_dir.join(TEMPLATE_RELATIVE_PATH),
            output_file: site_dir.join(OUTPUT_RELATIVE_PATH),
            notebook_dir: site_dir,
            style: LiteralStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarOutcome {
    pub output: PathBuf,
    pub groups: SortedYearGroups,
    /// Identifiers listed in the TOC, before filtering.
    pub toc_entries: usize,
}

/// Build the sorted year groups for `config`.
pub fn collect_year_groups(config: &SidebarConfig, years: &dyn YearSource) -> Result<(usize, SortedYearGroups)> {
    let identifiers = parse_toc(&config.toc_file)?;
    tracing::debug!(entries = identifiers.len(), toc = %config.toc_file.display(), "parsed TOC");
    let groups = generate_year_groups(&config.notebook_dir, &identifiers, years)?;
    Ok((identifiers.len(), sort_years(&groups)))
}

/// Per-year counts, in the format printed before the output is written.
pub fn write_summary<W: Write>(groups: &SortedYearGroups, out: &mut W) -> io::Result<()> {
    writeln!(out, "Generated year groupings from file dates:")?;
    for (year, ids) in groups.iter() {
        writeln!(out, "  {year}: {} posts", ids.len())?;
    }
    Ok(())
}

/// Render `groups` into the template and write the output file.
///
/// A missing template is reported before anything is written.
pub fn write_sidebar(config: &SidebarConfig, groups: &SortedYearGroups) -> Result<PathBuf> {
    if !config.template_file.is_file() {
        return Err(SidebarError::TemplateNotFound(config.template_file.clone()));
    }
    let template = fs::read_to_string(&config.template_file)?;
    let literal = render_year_groups(groups, config.style)?;
    let rendered = apply_template(&template, &literal);

    fs::write(&config.output_file, rendered)?;
    tracing::info!(path = %config.output_file.display(), years = groups.len(), "wrote sidebar script");
    Ok(config.output_file.clone())
}

/// Full run: TOC → year groups → summary (to `summary`) → output file.
pub fn generate_sidebar<W: Write>(
    config: &SidebarConfig,
    years: &dyn YearSource,
    summary: &mut W,
) -> Result<SidebarOutcome> {
    let (toc_entries, groups) = collect_year_groups(config, years)?;
    write_summary(&groups, summary)?;
    let output = write_sidebar(config, &groups)?;
    Ok(SidebarOutcome {
        output,
        groups,
        toc_entries,
    })
}
