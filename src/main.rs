// Borsch postprocess - version propagation for CMake build trees
// Main CLI entry point

use borsch_postprocess::cli::Cli;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.run() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}
