//! File sink for rendered emissions.
//!
//! Rendered files are collected in a [`FileRegistry`] first, so a run can
//! be previewed without touching the disk, then written in one pass.
//!
//! # Example
//!
//! ```ignore
//! let emissions = emit(&ctx)?;
//! let registry = FileRegistry::render(&emissions, &renderer)?;
//! let stats = registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use quill_core::{Overwrite, WriteResult, write_with};
use tracing::debug;

use crate::{
    Error, Result,
    emit::{Emission, EmissionKind},
    render::Renderer,
};

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the output root.
    pub path: String,
    pub content: String,
    pub kind: EmissionKind,
    pub overwrite: Overwrite,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>, kind: EmissionKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
            overwrite: Overwrite::Always,
        }
    }

    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file under `base`.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.full_path(base);
        write_with(&path, self.content.as_bytes(), self.overwrite).map_err(|e| Error::io(path, e))
    }
}

/// Rendered files of one run, in emission order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every emission.
    ///
    /// # Errors
    ///
    /// Returns the first render failure.
    pub fn render(emissions: &[Emission], renderer: &dyn Renderer) -> Result<Self> {
        let mut registry = Self::new();
        for emission in emissions {
            let content = renderer.render(&emission.template, &emission.context)?;
            registry.register(FileEntry::new(emission.path(), content, emission.kind));
        }
        Ok(registry)
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Apply one overwrite rule to every entry.
    pub fn set_overwrite(&mut self, overwrite: Overwrite) {
        for entry in &mut self.entries {
            entry.overwrite = overwrite;
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn entries_by_kind(&self, kind: EmissionKind) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths and contents without writing.
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries
            .iter()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                kind: e.kind,
            })
            .collect()
    }

    /// Write every file under `base`, in registration order.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in &self.entries {
            match entry.write(base)? {
                WriteResult::Written => {
                    debug!(path = %entry.path, "wrote file");
                    stats.written += 1;
                    stats.written_paths.push(entry.path.clone());
                }
                WriteResult::Skipped => {
                    debug!(path = %entry.path, "kept existing file");
                    stats.skipped += 1;
                    stats.skipped_paths.push(entry.path.clone());
                }
            }
        }

        Ok(stats)
    }
}

/// A file as it would be written.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub path: String,
    pub content: String,
    pub kind: EmissionKind,
}

/// Statistics from a write pass.
#[derive(Debug, Default)]
pub struct WriteStats {
    pub written: usize,
    /// Files left alone because they already existed.
    pub skipped: usize,
    pub written_paths: Vec<String>,
    pub skipped_paths: Vec<String>,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}
