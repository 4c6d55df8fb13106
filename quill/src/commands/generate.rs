use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use quill_codegen::{
    Config, ContextRenderer, FileRegistry, Pipeline, Profile, Renderer, TeraRenderer, emit,
    pipeline::SnapshotPlugin,
};
use quill_core::Overwrite;
use quill_document::Document;
use tracing::info;

use super::UnwrapOrExit;
use crate::reports::{DiagnosticEntry, GenerateReport, GenerationResult, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the API description (JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target profile (see `quill profiles`)
    #[arg(short, long, default_value = "swift")]
    pub profile: String,

    /// Output directory (defaults to generated-code/<profile>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file with an [options] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set an option (repeatable, wins over --config)
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub define: Vec<String>,

    /// Directory of Tera templates (renders contexts as JSON when omitted)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Write a JSON snapshot of the IR after each phase into this directory
    #[arg(long, value_name = "DIR")]
    pub visualize: Option<PathBuf>,

    /// Keep files that already exist
    #[arg(long)]
    pub skip_existing: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let registry = quill_codegen_swift::registry();
        let profile = registry.get(&self.profile).unwrap_or_exit();
        let document = Document::from_file(&self.input).unwrap_or_exit();
        let config = self.load_config()?;

        let mut pipeline = Pipeline::new();
        if let Some(dir) = &self.visualize {
            pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
        }
        let ctx = pipeline.run(profile, &document, &config).unwrap_or_exit();
        let emissions = emit(&ctx).unwrap_or_exit();

        let renderer = self.renderer();
        let mut files = FileRegistry::render(&emissions, renderer.as_ref()).unwrap_or_exit();
        if self.skip_existing {
            files.set_overwrite(Overwrite::IfMissing);
        }

        let output = self.output_dir(profile);
        let result = if self.dry_run {
            GenerationResult::Preview(files.preview())
        } else {
            let stats = files.write_all(&output).unwrap_or_exit();
            info!(written = stats.written, skipped = stats.skipped, "generation finished");
            GenerationResult::Written(stats)
        };

        let report = GenerateReport {
            profile: profile.name().to_string(),
            output,
            title: ctx.ir.as_ref().map(|ir| ir.meta.title.clone()).unwrap_or_default(),
            models: ctx.ir.as_ref().map_or(0, |ir| ir.models.len()),
            operations: ctx.ir.as_ref().map_or(0, |ir| ir.operation_count()),
            diagnostics: ctx
                .diagnostics
                .iter()
                .map(|d| DiagnosticEntry {
                    severity: d.severity.to_string(),
                    message: d.message.clone(),
                    location: d.location.clone(),
                })
                .collect(),
            snapshot_dir: self.visualize.clone(),
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Options from `--config`, overlaid with `-D` pairs.
    fn load_config(&self) -> Result<Config> {
        let file = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                Config::from_toml_str(&content).unwrap_or_exit()
            }
            None => Config::new(),
        };
        let cli = Config::from_pairs(self.define.iter().map(String::as_str)).unwrap_or_exit();
        Ok(file.merge(cli))
    }

    fn renderer(&self) -> Box<dyn Renderer> {
        match &self.templates {
            Some(dir) => Box::new(TeraRenderer::from_dir(dir).unwrap_or_exit()),
            None => Box::new(ContextRenderer),
        }
    }

    fn output_dir(&self, profile: &dyn Profile) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Path::new("generated-code").join(profile.name()))
    }
}
