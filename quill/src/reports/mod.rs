//! Report data structures for commands.
//!
//! Commands collect data into a report, then render it to an [`Output`].

mod config_help;
mod generate;
mod output;
mod profiles;

pub use config_help::{ConfigHelpReport, OptionEntry};
pub use generate::{DiagnosticEntry, GenerateReport, GenerationResult};
pub use output::{Report, TerminalOutput};
pub use profiles::{ProfileEntry, ProfilesReport};

#[cfg(test)]
pub(crate) use output::testing;
