//! Pipeline orchestrator.

use quill_document::Document;
use tracing::{debug, info};

use super::{
    GenerationContext, Phase, Plugin,
    phases::{BuildPhase, ExamplePhase, GroupPhase, ModelPhase, PropertyPhase},
};
use crate::{Config, Profile, Result};

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (build, model, property, group, examples) in
/// that order, followed by any user phases, calling plugin hooks before and
/// after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::new());
/// let ctx = pipeline.run(profile, &document, &config)?;
/// let emissions = emit(&ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline for one document with the selected profile.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; the run is abandoned at that point.
    pub fn run<'p>(
        &self,
        profile: &'p dyn Profile,
        document: &'p Document,
        config: &Config,
    ) -> Result<GenerationContext<'p>> {
        let target = profile.configure(config);
        let mut ctx = GenerationContext::new(profile, document, target);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(BuildPhase),
            Box::new(ModelPhase),
            Box::new(PropertyPhase),
            Box::new(GroupPhase),
            Box::new(ExamplePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        info!(
            profile = profile.name(),
            warnings = ctx.warning_count(),
            "pipeline finished"
        );
        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        debug!(phase = phase_name, "{}", phase.description());
        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
