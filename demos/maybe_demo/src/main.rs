//! Maybe demo entry-point: parse the command line, install logging, run the
//! selected workflow.

use std::io;

use clap::Parser;

use maybe_demo::cli::{CommandLine, Commands};
use maybe_demo::error::Result;
use maybe_demo::{logging, producer, showcase};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = CommandLine::parse();
    logging::init(&cli.log_filter)?;
    run(cli.selected()).map_err(color_eyre::eyre::Report::from)
}

fn run(command: Commands) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match command {
        Commands::Showcase => showcase::run(&mut stdout),
        Commands::Produce { number } => producer::write_produced(&mut stdout, number),
        Commands::Coerce { number } => producer::write_coerced(&mut stdout, number),
    }
}
