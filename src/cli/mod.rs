//! Command-line interface module
//!
//! This module handles argument parsing and output. It contains no business
//! logic - that belongs in the [`crate::core`] module.

pub mod commands;

use anyhow::Result;
use clap::Parser;

use crate::core::defs::Definitions;

use commands::Commands;

/// Baseimage-defs - Docker baseimage build matrix helper
///
/// Derive build parameters for the Docker baseimage flavors from the
/// definitions document shipped next to the program.
#[derive(Parser, Debug)]
#[command(name = "baseimage-defs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    ///
    /// The definitions document is loaded once, after argument parsing, and
    /// passed by reference into the selected command.
    pub fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            let defs = Definitions::load(&Definitions::default_path()?)?;
            cmd.run(&defs)?;
            Ok(())
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
