/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for mdunits

use clap::Parser;
use mdunits::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Cli::parse();
    log::debug!("mdunits v{}: {:?}", mdunits::VERSION, args.command);

    println!("{}", cli::run(&args)?);

    Ok(())
}
