// ccp/src/cli.rs
//! Defines the command-line argument structure using clap.
use ccp_common::Config;
use ccp_common::error::Result;
use clap::{ArgAction, Parser, Subcommand};

pub mod baseline;
pub mod inspect;
pub mod output;
pub mod package;

use crate::cli::baseline::Baseline;
use crate::cli::inspect::Inspect;
use crate::cli::package::Package;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "ccp", bin_name = "ccp")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a package and list the dependencies it needs beyond the baseline
    Inspect(Inspect),
    /// Build a custom content tree holding a package and its dependencies
    Package(Package),
    /// Scan a game tree and record every package GUID it ships
    Baseline(Baseline),
}

impl Command {
    pub fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Inspect(command) => command.run(config),
            Self::Package(command) => command.run(config),
            Self::Baseline(command) => command.run(config),
        }
    }
}
