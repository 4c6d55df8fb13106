//! The `swift` profile: Alamofire-based clients.

use quill_codegen::{
    Config, ConfigOption, DefaultLiterals, Layout, Manifest, ManifestEntry, Profile,
    ProfileSpec, ReturnHints, Settings, Target, TemplateBinding,
};
use quill_core::PathTemplater;

use crate::{
    naming::swift_names,
    type_mapper::{swift_classes, swift_types},
};

pub const PROJECT_NAME: &str = "projectName";

const DEFAULT_PROJECT_NAME: &str = "SwaggerClient";

/// Literals shared by the Swift profiles.
pub const SWIFT_LITERALS: DefaultLiterals = DefaultLiterals {
    null: "nil",
    zero: "0",
    boolean: "false",
    string: "\"\"",
    list: "[]",
    map: "[:]",
    enum_pattern: "{type}(rawValue: \"{raw}\")!",
};

const OPTIONS: &[ConfigOption] = &[
    ConfigOption::text(PROJECT_NAME, "Project name in Xcode", DEFAULT_PROJECT_NAME),
    ConfigOption::text("responseAs", "Optionally use libraries to manage response (PromiseKit)", ""),
    ConfigOption::flag("unwrapRequired", "Treat 'required' properties as non-optional", false),
    ConfigOption::text("podSource", "Source information used for Podspec", ""),
    ConfigOption::text("podVersion", "Version used for Podspec", ""),
    ConfigOption::text("podAuthors", "Authors used for Podspec", ""),
    ConfigOption::text("podSocialMediaURL", "Social Media URL used for Podspec", ""),
    ConfigOption::text("podDocsetURL", "Docset URL used for Podspec", ""),
    ConfigOption::text("podLicense", "License used for Podspec", ""),
    ConfigOption::text("podHomepage", "Homepage used for Podspec", ""),
    ConfigOption::text("podSummary", "Summary used for Podspec", ""),
    ConfigOption::text("podDescription", "Description used for Podspec", ""),
    ConfigOption::text("podScreenshots", "Screenshots used for Podspec", ""),
    ConfigOption::text("podDocumentationURL", "Documentation URL used for Podspec", ""),
];

/// Generated sources root for a project.
pub fn source_folder(project: &str) -> String {
    format!("{}/Classes/Swaggers", project)
}

/// Supporting files of the swift profile.
pub fn swift_manifest(project: &str, source: &str) -> Manifest {
    [
        ManifestEntry::new("Podspec.tera", "", format!("{}.podspec", project)),
        ManifestEntry::new("Cartfile.tera", "", "Cartfile"),
        ManifestEntry::new("APIHelper.tera", source, "APIHelper.swift"),
        ManifestEntry::new(
            "AlamofireImplementations.tera",
            source,
            "AlamofireImplementations.swift",
        ),
        ManifestEntry::new("Extensions.tera", source, "Extensions.swift"),
        ManifestEntry::new("Models.tera", source, "Models.swift"),
        ManifestEntry::new("APIs.tera", source, "APIs.swift"),
    ]
    .into_iter()
    .collect()
}

fn swift_spec() -> ProfileSpec {
    let layout = Layout::new(source_folder(DEFAULT_PROJECT_NAME));
    let manifest = swift_manifest(DEFAULT_PROJECT_NAME, &layout.source_folder);

    ProfileSpec {
        types: swift_types(),
        classes: swift_classes(),
        names: swift_names(),
        literals: SWIFT_LITERALS,
        path: PathTemplater::new("{", "}"),
        layout,
        manifest,
        model_templates: vec![TemplateBinding::new("model.tera", ".swift")],
        api_templates: vec![TemplateBinding::new("api.tera", ".swift")],
        top_level: Vec::new(),
        options: OPTIONS.to_vec(),
        strip_resource_prefix: false,
        return_hints: ReturnHints {
            count: "Int",
            delete: "Bool",
        },
    }
}

/// Resolve options and re-root the layout and manifest at the configured
/// project name.
pub(crate) fn configure_swift(spec: &ProfileSpec, config: &Config) -> Target {
    let settings = Settings::resolve(&spec.options, config);
    let project = settings
        .string(PROJECT_NAME)
        .unwrap_or(DEFAULT_PROJECT_NAME)
        .to_string();

    let mut spec = spec.clone();
    spec.layout = Layout::new(source_folder(&project));
    spec.manifest = swift_manifest(&project, &spec.layout.source_folder);
    Target::new(spec, settings)
}

/// Swift 2 clients built on Alamofire.
#[derive(Debug, Clone)]
pub struct SwiftProfile {
    spec: ProfileSpec,
}

impl SwiftProfile {
    pub const NAME: &'static str = "swift";

    pub fn new() -> Self {
        Self { spec: swift_spec() }
    }
}

impl Default for SwiftProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile for SwiftProfile {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn help(&self) -> &'static str {
        "Generates a swift client library."
    }

    fn spec(&self) -> &ProfileSpec {
        &self.spec
    }

    fn configure(&self, config: &Config) -> Target {
        configure_swift(&self.spec, config)
    }
}
