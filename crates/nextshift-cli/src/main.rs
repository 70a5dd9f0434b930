//! Entry point for the `nextshift` migration CLI.
//!
//! Handles argument parsing, logging initialization, and hands off to the
//! migration pipeline.

use clap::Parser;
use miette::Result;
use nextshift_cli::{cli, commands, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    commands::migrate_execute(&args)
}
