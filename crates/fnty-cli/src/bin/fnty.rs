#![allow(clippy::print_stderr)]

use clap::Parser;
use colored::Colorize;
use fnty_cli::args::CliArgs;
use fnty_cli::{driver, tracing_config};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    match driver::run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
