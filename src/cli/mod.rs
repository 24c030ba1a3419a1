//! CLI module for Easter Races
//!
//! Provides subcommands for driving the race controller:
//! - `run`: process text commands from stdin or a file

pub mod console;
pub mod run;

use clap::{Parser, Subcommand};

/// Easter Races - manage drivers, cars and races from the command line
#[derive(Parser)]
#[command(name = "easter-races")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process console commands until `End` or end of input
    Run(run::RunArgs),
}
