//! Pipeline phase trait.

use super::GenerationContext;
use crate::Result;

/// A phase in the generation pipeline.
///
/// Phases run in a fixed order. Each one reads and refines the run's
/// context; fatal problems are returned as errors, anything else is
/// recorded as a diagnostic.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics, logs and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;
}
