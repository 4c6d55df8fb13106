//! Output folder layout.

/// Join two relative folders with `/`, skipping empty parts.
pub fn join_folder(base: &str, child: &str) -> String {
    match (base.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base.trim_end_matches('/'), child),
    }
}

/// Where each kind of generated file lands, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Root of generated sources (e.g., `PetKit/Classes/Swaggers`).
    pub source_folder: String,
    pub model_package: String,
    pub api_package: String,
    pub auth_package: String,
    pub util_package: String,
    pub persistence_package: String,
}

impl Layout {
    pub fn new(source_folder: impl Into<String>) -> Self {
        Self {
            source_folder: source_folder.into(),
            model_package: "Models".into(),
            api_package: "APIs".into(),
            auth_package: "Auth".into(),
            util_package: "Util".into(),
            persistence_package: "Realm".into(),
        }
    }

    pub fn model_folder(&self) -> String {
        join_folder(&self.source_folder, &self.model_package)
    }

    pub fn api_folder(&self) -> String {
        join_folder(&self.source_folder, &self.api_package)
    }

    pub fn auth_folder(&self) -> String {
        join_folder(&self.source_folder, &self.auth_package)
    }

    pub fn util_folder(&self) -> String {
        join_folder(&self.source_folder, &self.util_package)
    }

    pub fn persistence_folder(&self) -> String {
        join_folder(&self.source_folder, &self.persistence_package)
    }
}
