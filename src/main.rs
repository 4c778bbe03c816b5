use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};
use snafu::{Report, ResultExt};

use crate::cli::Cli;
use crate::generator::{GenerateError, SettingsSnafu};
use crate::printer::models::PrinterConfig;

mod cli;
mod config;
mod generator;
mod pkginfo;
mod printer;
mod scripts;

fn main() -> ExitCode {
    // Argument errors exit here, before anything is written.
    let cli = Cli::parse();

    colog::default_builder()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init();

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", Report::from_error(e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<std::path::PathBuf, GenerateError> {
    let settings = crate::config::loading::load_config().context(SettingsSnafu)?;
    let printer = PrinterConfig::from(cli);
    generator::generate(&printer, &settings)
}
