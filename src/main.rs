#![doc = include_str!("../README.md")]

use std::process::ExitCode;

use clap::Parser;

mod functions;
mod report;

use report::Report;

/// Check that the Rust toolchain can build and run a multi-module binary
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = main_internal(args) {
        eprintln!("Error: {:?}", e);
        report::error_message("toolchain check failed, please see errors above.");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn main_internal(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");
    let report = Report::default();
    let stdout = std::io::stdout();
    report.write_to(stdout.lock())?;
    log::debug!("toolchain check passed");
    Ok(())
}
