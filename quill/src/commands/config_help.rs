use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::reports::{ConfigHelpReport, OptionEntry, Report, TerminalOutput};

#[derive(Args)]
pub struct ConfigHelpCommand {
    /// Profile to describe
    #[arg(short, long)]
    pub profile: String,
}

impl ConfigHelpCommand {
    pub fn run(&self) -> Result<()> {
        let registry = quill_codegen_swift::registry();
        let profile = registry.get(&self.profile).unwrap_or_exit();

        let report = ConfigHelpReport {
            profile: profile.name().to_string(),
            options: profile
                .spec()
                .options
                .iter()
                .map(|o| OptionEntry {
                    name: o.name.to_string(),
                    description: o.description.to_string(),
                    default: o.default_text(),
                })
                .collect(),
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
