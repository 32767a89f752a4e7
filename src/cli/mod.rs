//! Command-line interface wiring for the `cardsheet` binary.
//!
//! This module owns the clap definitions and delegates execution to one
//! submodule per command.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

pub mod check;
pub mod common;
pub mod layout;
pub mod render;
pub mod utils;

/// Parsed CLI entrypoint for the `cardsheet` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cardsheet",
    version,
    about = "Render printable trading card sheets from JSON card lists"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a card list to a PDF sheet.
    Render(render::RenderArgs),
    /// Validate a card list and report missing images.
    Check(check::CheckArgs),
    /// Print the computed sheet geometry.
    Layout(layout::LayoutCommandArgs),
}

impl Cli {
    /// Default log filter derived from `-v` flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => render::handle(args),
        Command::Check(args) => check::handle(args),
        Command::Layout(args) => layout::handle(args),
    }
}
