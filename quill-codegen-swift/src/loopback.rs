//! The `LoopBackSwift` profile.
//!
//! Clients for LoopBack APIs built on RxAlamofire and ObjectMapper, with
//! optional Realm persistence and a generic data API over every model.

use quill_codegen::{
    Config, ConfigOption, DefaultLiterals, Layout, Manifest, ManifestEntry, Profile, ProfileSpec,
    ReturnHints, Settings, Target, TemplateBinding,
};
use quill_core::{PathTemplater, sanitize_identifier, to_camel_case};
use quill_ir::Property;
use tracing::debug;

use crate::{
    naming::loopback_names,
    type_mapper::{loopback_classes, loopback_types},
};

pub const USE_REALM: &str = "useRealm";
pub const GENERATE_DATA_API: &str = "generateDataAPI";

const PROJECT_NAME: &str = "projectName";
const DEFAULT_PROJECT_NAME: &str = "LoopBackSwiftClient";

const OPTIONS: &[ConfigOption] = &[
    ConfigOption::text(PROJECT_NAME, "Project name in Xcode", DEFAULT_PROJECT_NAME),
    ConfigOption::text("projectLicense", "License text of the project", "The MIT License (MIT)"),
    ConfigOption::text("primaryKeyFieldName", "Name of the identity property of every model", "id"),
    ConfigOption::flag(USE_REALM, "Generate Realm-backed models", false),
    ConfigOption::flag(GENERATE_DATA_API, "Generate a data API over all models", false),
];

const LITERALS: DefaultLiterals = DefaultLiterals {
    null: "nil",
    zero: "0",
    boolean: "false",
    string: "\"\"",
    list: "[:]",
    map: "[:]",
    enum_pattern: "{type}(rawValue: \"{raw}\")!",
};

fn manifest(project: &str, layout: &Layout) -> Manifest {
    let auth = layout.auth_folder();
    let util = layout.util_folder();

    [
        ManifestEntry::new("AuthenticationMethod.tera", auth.as_str(), "AuthenticationMethod.swift"),
        ManifestEntry::new("APIKey.tera", auth.as_str(), "APIKey.swift"),
        ManifestEntry::new("RequestAuthenticator.tera", auth.as_str(), "RequestAuthenticator.swift"),
        ManifestEntry::new("BaseAPI.tera", util.as_str(), "API.swift"),
        ManifestEntry::new("APIError.tera", util.as_str(), "APIError.swift"),
        ManifestEntry::new(
            "RxAlamofireObjectMapping.tera",
            util.as_str(),
            "RxAlamofireObjectMapping.swift",
        ),
        ManifestEntry::new(
            "Primitives+URLEscapedString.tera",
            util.as_str(),
            "Primitives+URLEscapedString.swift",
        ),
        ManifestEntry::new("NSData+JSON.tera", util.as_str(), "NSData+JSON.swift"),
        ManifestEntry::new(
            "Int64+_ObjectiveCBridgeable.tera",
            util.as_str(),
            "Int64+_ObjectiveCBridgeable.swift",
        ),
        ManifestEntry::new(
            "ISO8601ExtendedDateTransform.tera",
            util.as_str(),
            "ISO8601ExtendedDateTransform.swift",
        ),
        ManifestEntry::new("Podspec.tera", "", format!("{}.podspec", project)),
        ManifestEntry::new("LICENSE.tera", "", "LICENSE"),
        ManifestEntry::new("NSDate+toString.tera", util.as_str(), "NSDate+toString.swift"),
    ]
    .into_iter()
    .collect()
}

fn loopback_spec() -> ProfileSpec {
    let layout = Layout::new(DEFAULT_PROJECT_NAME);
    let manifest = manifest(DEFAULT_PROJECT_NAME, &layout);

    ProfileSpec {
        types: loopback_types(),
        classes: loopback_classes(),
        names: loopback_names(),
        literals: LITERALS,
        path: PathTemplater::new("\\(", ")"),
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

/// LoopBack clients.
#[derive(Debug, Clone)]
pub struct LoopBackProfile {
    spec: ProfileSpec,
}

impl LoopBackProfile {
    pub const NAME: &'static str = "LoopBackSwift";

    pub fn new() -> Self {
        Self {
            spec: loopback_spec(),
        }
    }
}

impl Default for LoopBackProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile for LoopBackProfile {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn help(&self) -> &'static str {
        "Generates a client library for the LoopBackSwift framework."
    }

    fn spec(&self) -> &ProfileSpec {
        &self.spec
    }

    fn configure(&self, config: &Config) -> Target {
        let settings = Settings::resolve(&self.spec.options, config);
        let project = settings
            .string(PROJECT_NAME)
            .unwrap_or(DEFAULT_PROJECT_NAME)
            .to_string();

        let mut spec = self.spec.clone();
        spec.layout = Layout::new(project.as_str());
        spec.manifest = manifest(&project, &spec.layout);

        if settings.flag(USE_REALM) {
            let realm = spec.layout.persistence_folder();
            for name in [
                "RealmListTransform",
                "RealmOptionalTransform",
                "RealmWrappers",
                "RealmInt64ListTransform",
            ] {
                spec.manifest.add(ManifestEntry::new(
                    format!("{}.tera", name),
                    realm.as_str(),
                    format!("{}.swift", name),
                ));
            }
            spec.types.insert("object", "NSData");
        }

        if settings.flag(GENERATE_DATA_API) {
            spec.top_level.push(ManifestEntry::new(
                "DataAPI.tera",
                spec.layout.source_folder.as_str(),
                "DataAPI.swift",
            ));
            let util = spec.layout.util_folder();
            for name in ["UnsupportedOperation", "UnsupportedModelType"] {
                spec.manifest.add(ManifestEntry::new(
                    format!("{}.tera", name),
                    util.as_str(),
                    format!("{}.swift", name),
                ));
            }
            spec.strip_resource_prefix = true;
        }

        debug!(
            project = %project,
            realm = settings.flag(USE_REALM),
            data_api = settings.flag(GENERATE_DATA_API),
            "configured LoopBackSwift target"
        );
        Target::new(spec, settings)
    }

    /// Only the last `.`-separated segment names the method
    /// (`Pet.prototype.find` becomes `find`).
    fn to_operation_id(&self, _target: &Target, raw: &str) -> String {
        let last = raw.rsplit('.').next().unwrap_or(raw);
        to_camel_case(&sanitize_identifier(last))
    }

    fn normalize_id_type(&self, _target: &Target, data_type: &str) -> String {
        match data_type {
            "Double" => "Int".to_string(),
            other => other.to_string(),
        }
    }

    fn post_process_property(&self, target: &Target, property: &mut Property, is_id: bool) {
        if property.base_type == "Int64" {
            property.flags.is_primitive_type = true;
        }
        if is_id && target.settings.flag(USE_REALM) {
            property.required = true;
            property.is_id = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use quill_codegen::layout::join_folder;

    use super::*;

    fn configure(pairs: &[&str]) -> Target {
        LoopBackProfile::new().configure(&Config::from_pairs(pairs.iter().copied()).unwrap())
    }

    fn files(target: &Target) -> Vec<String> {
        target
            .spec
            .manifest
            .iter()
            .map(|e| join_folder(&e.folder, &e.file_name))
            .collect()
    }

    #[test]
    fn test_default_options() {
        let target = configure(&[]);

        assert_eq!(target.settings.string("projectName"), Some("LoopBackSwiftClient"));
        assert_eq!(target.settings.string("projectLicense"), Some("The MIT License (MIT)"));
        assert_eq!(target.settings.string("primaryKeyFieldName"), Some("id"));
        assert!(!target.settings.flag(USE_REALM));
        assert!(!target.settings.flag(GENERATE_DATA_API));
        assert!(!target.spec.strip_resource_prefix);
    }

    #[test]
    fn test_supporting_files() {
        let target = configure(&["projectName=PetKit"]);

        assert_eq!(
            files(&target),
            vec![
                "PetKit/Auth/AuthenticationMethod.swift",
                "PetKit/Auth/APIKey.swift",
                "PetKit/Auth/RequestAuthenticator.swift",
                "PetKit/Util/API.swift",
                "PetKit/Util/APIError.swift",
                "PetKit/Util/RxAlamofireObjectMapping.swift",
                "PetKit/Util/Primitives+URLEscapedString.swift",
                "PetKit/Util/NSData+JSON.swift",
                "PetKit/Util/Int64+_ObjectiveCBridgeable.swift",
                "PetKit/Util/ISO8601ExtendedDateTransform.swift",
                "PetKit.podspec",
                "LICENSE",
                "PetKit/Util/NSDate+toString.swift",
            ]
        );
    }

    #[test]
    fn test_realm_patches_target_only() {
        let profile = LoopBackProfile::new();
        let target = profile.configure(&Config::from_pairs(["useRealm=true"]).unwrap());

        assert_eq!(target.spec.types.resolve_token("object"), "NSData");
        assert_eq!(profile.spec().types.resolve_token("object"), "AnyObject");
        assert!(files(&target).contains(&"LoopBackSwiftClient/Realm/RealmWrappers.swift".to_string()));
        assert_eq!(target.spec.manifest.len(), 17);
    }

    #[test]
    fn test_data_api() {
        let target = configure(&["generateDataAPI=true"]);

        assert!(target.spec.strip_resource_prefix);
        assert_eq!(target.spec.top_level.len(), 1);
        assert_eq!(target.spec.top_level[0].file_name, "DataAPI.swift");
        assert!(
            files(&target).contains(&"LoopBackSwiftClient/Util/UnsupportedOperation.swift".to_string())
        );
    }

    #[test]
    fn test_only_literal_true_enables_flags() {
        let target = configure(&["useRealm=TRUE", "generateDataAPI=1"]);
        assert!(!target.settings.flag(USE_REALM));
        assert!(!target.settings.flag(GENERATE_DATA_API));
    }

    #[test]
    fn test_operation_id_uses_last_segment() {
        let profile = LoopBackProfile::new();
        let target = configure(&[]);
        assert_eq!(profile.to_operation_id(&target, "Pet.prototype.__get__owner"), "getOwner");
        assert_eq!(profile.to_operation_id(&target, "Pet.find_one"), "findOne");
        assert_eq!(profile.to_operation_id(&target, "count"), "count");
    }

    #[test]
    fn test_double_id_becomes_int() {
        let profile = LoopBackProfile::new();
        let target = configure(&[]);
        assert_eq!(profile.normalize_id_type(&target, "Double"), "Int");
        assert_eq!(profile.normalize_id_type(&target, "String"), "String");
    }

    #[test]
    fn test_realm_forces_id_required() {
        let profile = LoopBackProfile::new();
        let target = configure(&["useRealm=true"]);

        let mut id = Property::new("id", "Int64");
        profile.post_process_property(&target, &mut id, true);
        assert!(id.required);
        assert!(id.is_id);
        assert!(id.flags.is_primitive_type);

        let mut name = Property::new("name", "String");
        profile.post_process_property(&target, &mut name, false);
        assert!(!name.required);
    }
}
