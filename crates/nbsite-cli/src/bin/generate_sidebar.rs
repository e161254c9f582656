use anyhow::Result;
use clap::Parser;
use nbsite_cli::sidebar::{self, SidebarArgs};

fn main() -> Result<()> {
    nbsite_cli::logging::init();
    let args = SidebarArgs::parse();
    sidebar::run(&args)
}
