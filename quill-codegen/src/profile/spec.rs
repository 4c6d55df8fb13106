//! Profile tables and the run-scoped target built from them.

use quill_core::{NameSanitizer, PathTemplater, TypeClasses, TypeMapper};

use crate::{
    config::{ConfigOption, Settings},
    layout::Layout,
    manifest::{Manifest, ManifestEntry},
};

/// Target-language literals used by default-value synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultLiterals {
    /// Absent value (`nil`).
    pub null: &'static str,
    pub zero: &'static str,
    pub boolean: &'static str,
    pub string: &'static str,
    pub list: &'static str,
    pub map: &'static str,
    /// Enum construction, with `{type}` and `{raw}` placeholders.
    pub enum_pattern: &'static str,
}

impl DefaultLiterals {
    /// Construct an enum case from its raw value.
    pub fn enum_case(&self, type_name: &str, raw: &str) -> String {
        self.enum_pattern
            .replace("{type}", type_name)
            .replace("{raw}", raw)
    }
}

/// A per-entity template: one output file per model or per API group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBinding {
    pub template: String,
    /// Appended to the entity's class name (e.g., `.swift`).
    pub extension: String,
}

impl TemplateBinding {
    pub fn new(template: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            extension: extension.into(),
        }
    }
}

/// Return types assumed for count and delete operations when no response
/// says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnHints {
    pub count: &'static str,
    pub delete: &'static str,
}

/// Immutable tables describing one profile.
///
/// Built once when the profile is constructed. Runs never mutate it;
/// [`Profile::configure`](super::Profile::configure) clones it into a
/// [`Target`] and patches the clone.
#[derive(Debug, Clone)]
pub struct ProfileSpec {
    pub types: TypeMapper,
    pub classes: TypeClasses,
    pub names: NameSanitizer,
    pub literals: DefaultLiterals,
    pub path: PathTemplater,
    pub layout: Layout,
    /// Supporting files, in emission order.
    pub manifest: Manifest,
    pub model_templates: Vec<TemplateBinding>,
    pub api_templates: Vec<TemplateBinding>,
    /// Files rendered once with every model and group in scope.
    pub top_level: Vec<ManifestEntry>,
    pub options: Vec<ConfigOption>,
    /// Strip each group's resource path from its operation paths.
    pub strip_resource_prefix: bool,
    pub return_hints: ReturnHints,
}

impl ProfileSpec {
    /// The target's generic string type.
    pub fn string_type(&self) -> String {
        self.types.resolve_token("string")
    }
}

/// Everything one run needs from its profile: patched tables plus
/// resolved options.
#[derive(Debug, Clone)]
pub struct Target {
    pub spec: ProfileSpec,
    pub settings: Settings,
}

impl Target {
    pub fn new(spec: ProfileSpec, settings: Settings) -> Self {
        Self { spec, settings }
    }

    pub fn layout(&self) -> &Layout {
        &self.spec.layout
    }
}
