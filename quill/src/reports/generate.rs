//! Generate command report.

use std::path::PathBuf;

use quill_codegen::{WriteStats, output::PreviewEntry};

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub profile: String,

    /// Output root the files were (or would be) written under.
    pub output: PathBuf,

    /// API title from the document.
    pub title: String,

    pub models: usize,

    pub operations: usize,

    /// Non-fatal diagnostics collected by the pipeline.
    pub diagnostics: Vec<DiagnosticEntry>,

    /// Directory of phase snapshots, if visualization was enabled.
    pub snapshot_dir: Option<PathBuf>,

    pub result: GenerationResult,
}

#[derive(Debug)]
pub struct DiagnosticEntry {
    pub severity: String,
    pub message: String,
    pub location: Option<String>,
}

/// Files written to disk, or a dry-run preview.
#[derive(Debug)]
pub enum GenerationResult {
    Written(WriteStats),
    Preview(Vec<PreviewEntry>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            let location = diagnostic
                .location
                .as_ref()
                .map(|l| format!(" (at {})", l))
                .unwrap_or_default();
            let text = format!("{}{}", diagnostic.message, location);
            if diagnostic.severity == "warning" {
                out.warning(&text);
            } else {
                out.preformatted(&format!("{}: {}", diagnostic.severity, text));
            }
        }

        match &self.result {
            GenerationResult::Written(stats) => self.render_written(out, stats),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_header(&self, out: &mut dyn Output) {
        if !self.title.is_empty() {
            out.preformatted(&self.title);
        }
        out.key_value("Profile", &self.profile);
        out.key_value(
            "Parsed",
            &format!("{} models, {} operations", self.models, self.operations),
        );
    }

    fn render_written(&self, out: &mut dyn Output, stats: &WriteStats) {
        if let Some(dir) = &self.snapshot_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
            out.newline();
        }

        self.render_header(out);
        out.newline();

        out.section(&format!("Generated ({} files)", stats.written));
        for path in &stats.written_paths {
            out.added_item(path);
        }

        if !stats.skipped_paths.is_empty() {
            out.newline();
            out.section(&format!("Kept existing ({} files)", stats.skipped));
            for path in &stats.skipped_paths {
                out.skipped_item(path);
            }
        }

        out.newline();
        out.key_value("Output", &self.output.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewEntry]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_header(out);
        out.preformatted(&format!(
            "{} files would be generated in {}",
            files.len(),
            self.output.display()
        ));
    }
}
