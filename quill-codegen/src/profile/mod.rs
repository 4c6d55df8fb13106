//! Target profiles.
//!
//! A profile is an immutable [`ProfileSpec`] plus a fixed set of hooks the
//! pipeline calls at known points. Every hook has an engine default, so a
//! profile overrides only what its target does differently. Derived
//! profiles hold their base profile and delegate to it.

mod registry;
mod spec;

use std::fmt;

use quill_core::SchemaType;
use quill_ir::{Example, Model, OperationGroup, Property};

pub use registry::ProfileRegistry;
pub use spec::{DefaultLiterals, ProfileSpec, ReturnHints, Target, TemplateBinding};

use crate::{AnonymousNames, config::Config, config::Settings, defaults};

/// What a profile generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// A client library for calling the described API.
    Client,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Client => write!(f, "client"),
        }
    }
}

/// Hook interface implemented by every target profile.
pub trait Profile: Send + Sync {
    /// Stable name used for selection (e.g., `"swift"`).
    fn name(&self) -> &'static str;

    /// One-line description for listings.
    fn help(&self) -> &'static str;

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Client
    }

    /// The profile's immutable tables.
    fn spec(&self) -> &ProfileSpec;

    /// Build the run-scoped target for the given options.
    fn configure(&self, config: &Config) -> Target {
        let spec = self.spec().clone();
        let settings = Settings::resolve(&spec.options, config);
        Target::new(spec, settings)
    }

    fn to_model_name(&self, target: &Target, name: &str) -> String {
        defaults::model_name(target, name)
    }

    fn to_var_name(&self, target: &Target, name: &str) -> String {
        defaults::var_name(target, name)
    }

    fn to_param_name(&self, target: &Target, name: &str) -> String {
        self.to_var_name(target, name)
    }

    /// Name of the API type generated for one operation group.
    ///
    /// `base_name` is empty when the group has no usable resource segment.
    fn to_api_name(&self, _target: &Target, base_name: &str, anonymous: &AnonymousNames) -> String {
        defaults::api_name(base_name, anonymous)
    }

    /// Convert a declared operation id into a method name.
    ///
    /// Called only with ids the engine already checked to be non-empty and
    /// not reserved.
    fn to_operation_id(&self, _target: &Target, raw: &str) -> String {
        defaults::operation_id(raw)
    }

    /// Rewrite a path template into the target's interpolation syntax.
    fn normalize_path(&self, target: &Target, path: &str) -> String {
        target
            .spec
            .path
            .normalize(path, |param| self.to_param_name(target, param))
    }

    fn resolve_type(&self, target: &Target, ty: &SchemaType) -> String {
        target
            .spec
            .types
            .resolve(ty, &|name| self.to_model_name(target, name))
    }

    fn default_value(&self, target: &Target, property: &Property) -> String {
        defaults::default_value(target, property)
    }

    /// Adjust the resolved type of a model's id property.
    fn normalize_id_type(&self, _target: &Target, data_type: &str) -> String {
        data_type.to_string()
    }

    /// Called for every property after its flags are recomputed and before
    /// enum and default synthesis.
    fn post_process_property(&self, _target: &Target, _property: &mut Property, _is_id: bool) {}

    /// Called for every model at the end of the model pass.
    fn post_process_model(&self, _target: &Target, _model: &mut Model) {}

    /// Called for every non-empty group at the end of the group pass.
    fn post_process_group(&self, _target: &Target, _group: &mut OperationGroup) {}

    fn keeps_example(&self, _target: &Target, example: &Example) -> bool {
        example.content_type == "application/json"
    }

    fn normalize_example(&self, _target: &Target, example: &str) -> String {
        defaults::normalize_example(example)
    }
}

impl fmt::Debug for dyn Profile + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}
