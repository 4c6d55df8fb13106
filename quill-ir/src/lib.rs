//! Intermediate representation types for the quill client generator.
//!
//! # Architecture
//!
//! ```text
//! api.json → quill-document (parsing) → quill-ir (resolved IR) → emitter
//! ```
//!
//! IR objects are created once per generation run by the builder phase,
//! refined in place by the post-processing phases, and read-only while the
//! emitter joins them with a profile's file manifest. All types serialize
//! to camelCase keys so templates can consume them directly.

mod api;
mod model;
mod operation;

pub use api::{ApiIR, ApiMeta, GroupSummary, OperationGroup};
pub use model::{EnumCase, Model, Property, TypeFlags};
pub use operation::{Example, Operation, Parameter, ParameterLocation, Response};
pub use quill_core::{ContainerKind, HttpMethod};
