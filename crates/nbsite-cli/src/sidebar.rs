use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use nbsite_sidebar::{
    collect_year_groups, write_sidebar, write_summary, FileTimestampYear, LiteralStyle,
    SidebarConfig, TimestampKind,
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampArg {
    /// File creation (birth) time.
    Created,
    /// Last modification time.
    Modified,
}

impl From<TimestampArg> for TimestampKind {
    fn from(arg: TimestampArg) -> Self {
        match arg {
            TimestampArg::Created => TimestampKind::Created,
            TimestampArg::Modified => TimestampKind::Modified,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    /// `{'2024': ['a', 'b']}`
    Repr,
    /// `{"2024":["a","b"]}`
    Json,
}

impl From<StyleArg> for LiteralStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Repr => LiteralStyle::Repr,
            StyleArg::Json => LiteralStyle::Json,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "generate-sidebar")]
#[command(
    author,
    version,
    about = "Generate sidebar year groupings from notebook file dates"
)]
pub struct SidebarArgs {
    /// Site root holding `_toc.yml`, the notebooks and `_static/js/`.
    #[arg(long, env = "NBSITE_SITE_DIR", default_value = "site")]
    pub site_dir: PathBuf,

    /// TOC file (defaults to `<site-dir>/_toc.yml`).
    #[arg(long)]
    pub toc: Option<PathBuf>,

    /// Sidebar template (defaults to `<site-dir>/_static/js/sidebar_template.js`).
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Generated script (defaults to `<site-dir>/_static/js/custom.js`).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Which file timestamp dates a notebook.
    #[arg(long, value_enum, env = "NBSITE_TIMESTAMP", default_value_t = TimestampArg::Created)]
    pub timestamp: TimestampArg,

    /// Literal syntax substituted into the template.
    #[arg(long, value_enum, default_value_t = StyleArg::Repr)]
    pub style: StyleArg,
}

impl SidebarArgs {
    pub fn config(&self) -> SidebarConfig {
        let mut config = SidebarConfig::for_site(&self.site_dir);
        if let Some(toc) = &self.toc {
            config.toc_file = toc.clone();
        }
        if let Some(template) = &self.template {
            config.template_file = template.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        config.style = self.style.into();
        config
    }
}

pub fn run(args: &SidebarArgs) -> Result<()> {
    let config = args.config();
    let years = FileTimestampYear::new(args.timestamp.into());
    tracing::debug!(?config, timestamp = ?years.kind, "resolved sidebar configuration");

    let (_, groups) = collect_year_groups(&config, &years)
        .with_context(|| format!("failed to group notebooks listed in {}", config.toc_file.display()))?;
    write_summary(&groups, &mut io::stdout().lock())?;

    let output = write_sidebar(&config, &groups)?;
    println!("{} Updated {}", "ok".green().bold(), output.display());
    Ok(())
}
