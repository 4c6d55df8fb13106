//! Profile-driven IR pipeline and emitter for the quill client generator.
//!
//! A run takes a parsed [`Document`](quill_document::Document), a selected
//! [`Profile`] and a [`Config`]; the [`Pipeline`] builds and refines the
//! IR, and [`emit`](emit::emit) turns the result into an ordered list of
//! files to render.
//!
//! # Module Organization
//!
//! - [`profile`] - Profile hooks, immutable tables and the registry
//! - [`pipeline`] - Phases, plugins and run state
//! - [`emit`] - Emission planning
//! - [`render`] - Template rendering seam
//! - [`output`] - File sink
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod config;
pub mod defaults;
pub mod emit;
mod error;
pub mod layout;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod profile;
pub mod render;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{Config, ConfigOption, OptionDefault, Settings};
pub use emit::{Emission, EmissionKind, emit};
pub use error::{Error, Result};
pub use layout::Layout;
pub use manifest::{Manifest, ManifestEntry};
pub use output::{FileEntry, FileRegistry, WriteStats};
pub use pipeline::{AnonymousNames, Diagnostic, GenerationContext, Pipeline, Severity};
pub use profile::{
    DefaultLiterals, GeneratorKind, Profile, ProfileRegistry, ProfileSpec, ReturnHints, Target,
    TemplateBinding,
};
pub use render::{ContextRenderer, Renderer, TeraRenderer};
