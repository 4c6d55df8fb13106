//! The `moya` profile, derived from `swift`.

use quill_codegen::{
    AnonymousNames, Config, Layout, ManifestEntry, Profile, ProfileSpec, Target,
};
use quill_core::{PathTemplater, initial_caps};
use quill_ir::{Example, Property};
use tracing::debug;

use crate::swift::{PROJECT_NAME, SwiftProfile, configure_swift};

/// Moya clients.
///
/// Wraps the swift profile: it inherits the swift tables, replaces the
/// Alamofire support files with Moya ones and moves sources to the
/// project root.
#[derive(Debug, Clone)]
pub struct MoyaProfile {
    base: SwiftProfile,
    spec: ProfileSpec,
}

impl MoyaProfile {
    pub const NAME: &'static str = "moya";

    pub fn new() -> Self {
        let base = SwiftProfile::new();
        let mut spec = base.spec().clone();
        spec.path = PathTemplater::new("\\(", ".URLEscapedString)");
        Self { base, spec }
    }
}

impl Default for MoyaProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile for MoyaProfile {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn help(&self) -> &'static str {
        "Generates a client library for the Moya framework."
    }

    fn spec(&self) -> &ProfileSpec {
        &self.spec
    }

    fn configure(&self, config: &Config) -> Target {
        let mut target = configure_swift(&self.spec, config);
        let project = target
            .settings
            .string(PROJECT_NAME)
            .unwrap_or_default()
            .to_string();
        let swift_source = target.layout().source_folder.clone();

        let manifest = &mut target.spec.manifest;
        for (template, file_name) in [
            ("AlamofireImplementations.tera", "AlamofireImplementations.swift"),
            ("APIs.tera", "APIs.swift"),
            ("Models.tera", "Models.swift"),
            ("Extensions.tera", "Extensions.swift"),
            ("APIHelper.tera", "APIHelper.swift"),
        ] {
            manifest.remove(&ManifestEntry::new(template, swift_source.as_str(), file_name));
        }
        manifest.remove(&ManifestEntry::new("Cartfile.tera", "", "Cartfile"));
        manifest.remove(&ManifestEntry::new(
            "Podspec.tera",
            "",
            format!("{}.podspec", project),
        ));

        target.spec.layout = Layout::new(project.as_str());
        let source = target.spec.layout.source_folder.clone();
        for (template, file_name) in [
            ("Swift+URLEscapedString.tera", "String+URLEscapedString.swift"),
            ("ParameterEncoding+encode.tera", "ParameterEncoding+encode.swift"),
            ("Parameters.tera", "Parameters.swift"),
            ("JsonSerializable.tera", "JsonSerializable.swift"),
            ("JsonDeserializers.tera", "JsonDeserializers.swift"),
            ("Utils.tera", "Utils.swift"),
        ] {
            target
                .spec
                .manifest
                .add(ManifestEntry::new(template, source.as_str(), file_name));
        }

        debug!(source = %source, files = target.spec.manifest.len(), "configured moya target");
        target
    }

    fn to_model_name(&self, target: &Target, name: &str) -> String {
        self.base.to_model_name(target, name)
    }

    fn to_var_name(&self, target: &Target, name: &str) -> String {
        self.base.to_var_name(target, name)
    }

    fn to_api_name(&self, target: &Target, base_name: &str, anonymous: &AnonymousNames) -> String {
        self.base.to_api_name(target, base_name, anonymous)
    }

    fn to_operation_id(&self, target: &Target, raw: &str) -> String {
        initial_caps(&self.base.to_operation_id(target, raw))
    }

    /// Parameters keep their declared names inside the interpolation.
    fn normalize_path(&self, target: &Target, path: &str) -> String {
        target.spec.path.normalize(path, str::to_string)
    }

    fn default_value(&self, target: &Target, property: &Property) -> String {
        self.base.default_value(target, property)
    }

    fn keeps_example(&self, _target: &Target, _example: &Example) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use quill_codegen::layout::join_folder;

    use super::*;

    fn files(target: &Target) -> Vec<String> {
        target
            .spec
            .manifest
            .iter()
            .map(|e| join_folder(&e.folder, &e.file_name))
            .collect()
    }

    #[test]
    fn test_manifest_replaces_alamofire_files() {
        let target = MoyaProfile::new().configure(&Config::new());

        assert_eq!(target.layout().source_folder, "SwaggerClient");
        assert_eq!(
            files(&target),
            vec![
                "SwaggerClient/String+URLEscapedString.swift",
                "SwaggerClient/ParameterEncoding+encode.swift",
                "SwaggerClient/Parameters.swift",
                "SwaggerClient/JsonSerializable.swift",
                "SwaggerClient/JsonDeserializers.swift",
                "SwaggerClient/Utils.swift",
            ]
        );
    }

    #[test]
    fn test_project_name_applies_to_removals() {
        let mut config = Config::new();
        config.set(PROJECT_NAME, "PetKit");
        let target = MoyaProfile::new().configure(&config);

        let files = files(&target);
        assert!(!files.iter().any(|f| f.ends_with(".podspec")));
        assert!(files.iter().all(|f| f.starts_with("PetKit/")));
        assert_eq!(target.layout().model_folder(), "PetKit/Models");
    }

    #[test]
    fn test_operation_ids_are_initial_capped() {
        let profile = MoyaProfile::new();
        let target = profile.configure(&Config::new());
        assert_eq!(profile.to_operation_id(&target, "getPetById"), "GetPetById");
        assert_eq!(profile.to_operation_id(&target, "find_pets"), "FindPets");
    }

    #[test]
    fn test_path_escapes_raw_parameter_names() {
        let profile = MoyaProfile::new();
        let target = profile.configure(&Config::new());
        assert_eq!(
            profile.normalize_path(&target, "/user/{user_name}/pets"),
            "/user/\\(user_name.URLEscapedString)/pets"
        );
    }

    #[test]
    fn test_every_example_is_kept() {
        let profile = MoyaProfile::new();
        let target = profile.configure(&Config::new());
        assert!(profile.keeps_example(&target, &Example::new("application/xml", "<a/>")));
    }
}
