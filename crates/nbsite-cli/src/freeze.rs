use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use nbsite_notebook::{add_no_execute_tag, TagOptions};

pub const USAGE: &str = "Usage: freeze-notebook <input_notebook.ipynb> [output_notebook.ipynb]";

#[derive(Parser, Debug, Clone)]
#[command(name = "freeze-notebook")]
#[command(
    author,
    version,
    about = "Add the `no-execute` tag to every cell of a Jupyter notebook",
    long_about = "Add the `no-execute` tag to every cell of a Jupyter notebook.\n\n\
                  If no output file is given, the input notebook is overwritten."
)]
pub struct FreezeArgs {
    /// Notebook to modify.
    pub input: PathBuf,

    /// Write the modified notebook here instead of overwriting the input.
    pub output: Option<PathBuf>,

    /// Keep non-ASCII characters as-is instead of writing `\uXXXX` escapes.
    #[arg(long)]
    pub keep_unicode: bool,
}

impl FreezeArgs {
    pub fn options(&self) -> TagOptions {
        TagOptions {
            ensure_ascii: !self.keep_unicode,
        }
    }
}

pub fn run(args: &FreezeArgs) -> Result<()> {
    tracing::debug!(input = %args.input.display(), output = ?args.output, "freezing notebook");
    let outcome = add_no_execute_tag(&args.input, args.output.as_deref(), &args.options())?;
    println!(
        "{} Modified notebook saved to '{}'.",
        "ok".green().bold(),
        outcome.output.display()
    );
    Ok(())
}
