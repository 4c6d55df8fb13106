//! Generation pipeline.
//!
//! A [`Pipeline`] turns a parsed document into a fully resolved IR by
//! running fixed phases in order:
//!
//! - build: document to IR, using the profile's naming and type hooks
//! - model: id assignment, id type normalization, raw-property partition
//! - property: classification flags, enum cases, default literals
//! - group: path prefix stripping, successful responses, group summaries
//! - examples: example filtering and normalization
//!
//! Plugins observe every phase boundary. The resulting
//! [`GenerationContext`] is read by the [emitter](crate::emit).

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::{AnonymousNames, GenerationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
