mod completions;
mod dsl;
mod init;
mod list;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use dsl::DslCommand;
use eyre::Result;
use init::InitCommand;
use list::ListCommand;

/// Extension trait for exiting on input-layer errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sago_app::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sago")]
#[command(version)]
#[command(about = "Generate RBI files for methods your application defines at runtime")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Dsl(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate RBI files for dynamically defined DSL methods
    Dsl(DslCommand),

    /// Create a starter sago.toml
    Init(InitCommand),

    /// List available DSL generators
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
