// src/bin/cli.rs
use check_ink::cli::{self, Cli};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::init_logging();

    let args = Cli::parse();
    cli::run(&args)?;
    Ok(())
}
