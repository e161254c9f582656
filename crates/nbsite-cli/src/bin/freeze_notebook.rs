use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use nbsite_cli::freeze::{self, FreezeArgs};

fn main() -> ExitCode {
    nbsite_cli::logging::init();

    let args = match FreezeArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            let _ = err.print();
            eprintln!("{}", freeze::USAGE);
            return ExitCode::FAILURE;
        }
    };

    match freeze::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
