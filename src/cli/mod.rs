// CLI module for server startup and administrative operations

pub mod migrate;

use clap::{Parser, Subcommand};

/// Scorekeeper backend CLI
#[derive(Parser)]
#[command(name = "scorekeeper-backend")]
#[command(about = "Scorekeeper account backend", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations and start the HTTP server
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}
