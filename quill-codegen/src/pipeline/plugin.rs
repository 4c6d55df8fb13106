//! Pipeline plugin trait for extensibility.

use super::GenerationContext;
use crate::Result;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the run's context.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the run.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the run.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext<'_>) -> Result<()> {
        Ok(())
    }
}
