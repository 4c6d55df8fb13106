//! Run state passed through pipeline phases.

use std::sync::atomic::{AtomicUsize, Ordering};

use quill_document::Document;
use quill_ir::ApiIR;
use tracing::{info, warn};

use super::diagnostic::Diagnostic;
use crate::{Error, Profile, Result, Target};

/// Run-scoped counter naming operation groups that have no resource name.
///
/// Values start at 1 and are handed out in traversal order.
#[derive(Debug, Default)]
pub struct AnonymousNames {
    issued: AtomicUsize,
}

impl AnonymousNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next anonymous number.
    pub fn next(&self) -> usize {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// How many numbers were handed out.
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

/// State of one generation run.
///
/// Created by [`Pipeline::run`](super::Pipeline::run) and refined by each
/// phase in turn. Nothing in here outlives the run.
#[derive(Debug)]
pub struct GenerationContext<'p> {
    pub profile: &'p dyn Profile,
    pub document: &'p Document,
    /// Patched tables and resolved options for this run.
    pub target: Target,
    /// The IR (populated by the build phase).
    pub ir: Option<ApiIR>,
    pub diagnostics: Vec<Diagnostic>,
    pub anonymous: AnonymousNames,
}

impl<'p> GenerationContext<'p> {
    pub fn new(profile: &'p dyn Profile, document: &'p Document, target: Target) -> Self {
        Self {
            profile,
            document,
            target,
            ir: None,
            diagnostics: Vec::new(),
            anonymous: AnonymousNames::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Record a diagnostic and log it.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity.is_warning() {
            warn!(phase = %diagnostic.phase, location = ?diagnostic.location, "{}", diagnostic.message);
        } else {
            info!(phase = %diagnostic.phase, location = ?diagnostic.location, "{}", diagnostic.message);
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.add_diagnostic(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.add_diagnostic(Diagnostic::info(phase, message));
    }

    /// The built IR, or an error naming the phase that needed it.
    pub fn ir(&self, phase: &'static str) -> Result<&ApiIR> {
        self.ir.as_ref().ok_or(Error::IrNotBuilt { phase })
    }

    /// Take the IR out of the context, consuming it.
    pub fn take_ir(&mut self) -> Result<ApiIR> {
        self.ir.take().ok_or(Error::IrNotBuilt { phase: "take" })
    }
}
