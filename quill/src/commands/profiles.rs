use clap::Args;
use eyre::Result;

use crate::reports::{ProfileEntry, ProfilesReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ProfilesCommand {}

impl ProfilesCommand {
    pub fn run(&self) -> Result<()> {
        let registry = quill_codegen_swift::registry();
        let report = ProfilesReport {
            profiles: registry
                .iter()
                .map(|p| ProfileEntry {
                    name: p.name().to_string(),
                    help: p.help().to_string(),
                })
                .collect(),
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
