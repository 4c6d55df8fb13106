//! Config-help command report.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct OptionEntry {
    pub name: String,
    pub description: String,
    pub default: String,
}

/// Options a profile recognizes, with their defaults.
#[derive(Debug)]
pub struct ConfigHelpReport {
    pub profile: String,
    pub options: Vec<OptionEntry>,
}

impl Report for ConfigHelpReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Options of '{}'", self.profile));

        if self.options.is_empty() {
            out.preformatted("  (none)");
            return;
        }

        for option in &self.options {
            out.list_item(&format!(
                "{}: {} (default: {})",
                option.name, option.description, option.default
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_options_list_defaults() {
        let report = ConfigHelpReport {
            profile: "LoopBackSwift".into(),
            options: vec![OptionEntry {
                name: "useRealm".into(),
                description: "Generate Realm-backed models".into(),
                default: "false".into(),
            }],
        };

        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        Options of 'LoopBackSwift':
          - useRealm: Generate Realm-backed models (default: false)
        ");
    }

    #[test]
    fn test_no_options() {
        let report = ConfigHelpReport {
            profile: "plain".into(),
            options: Vec::new(),
        };

        assert_eq!(BufferOutput::render(&report), "Options of 'plain':\n  (none)");
    }
}
