mod completions;
mod config_help;
mod generate;
mod profiles;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use config_help::ConfigHelpCommand;
use eyre::Result;
use generate::GenerateCommand;
use profiles::ProfilesCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for quill_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for quill_document::Result<T> {
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
#[command(name = "quill")]
#[command(version)]
#[command(about = "Generate API client libraries from Swagger descriptions")]
pub(crate) struct Cli {
    /// Log debug output (overridden by QUILL_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Profiles(cmd) => cmd.run(),
            Commands::ConfigHelp(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a client library from an API description
    Generate(GenerateCommand),

    /// List available profiles
    Profiles(ProfilesCommand),

    /// Show the options a profile recognizes
    ConfigHelp(ConfigHelpCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
