//! Profiles command report.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ProfileEntry {
    pub name: String,
    pub help: String,
}

/// Registered profiles in registration order.
#[derive(Debug)]
pub struct ProfilesReport {
    pub profiles: Vec<ProfileEntry>,
}

impl Report for ProfilesReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self.profiles.iter().map(|p| p.name.len()).max().unwrap_or(0);

        out.section("Profiles");
        for profile in &self.profiles {
            out.list_item(&format!("{:width$}  {}", profile.name, profile.help));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_profiles_are_aligned() {
        let report = ProfilesReport {
            profiles: vec![
                ProfileEntry {
                    name: "swift".into(),
                    help: "Swift clients".into(),
                },
                ProfileEntry {
                    name: "LoopBackSwift".into(),
                    help: "LoopBack clients".into(),
                },
            ],
        };

        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        Profiles:
          - swift          Swift clients
          - LoopBackSwift  LoopBack clients
        ");
    }
}
