//! Supporting-file manifests.

use serde::Serialize;

/// One supporting file a profile emits.
///
/// Two entries are the same entry when template, folder and file name all
/// match; derived profiles rely on this to remove a base profile's files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub template: String,
    pub folder: String,
    pub file_name: String,
}

impl ManifestEntry {
    pub fn new(
        template: impl Into<String>,
        folder: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            file_name: file_name.into(),
        }
    }
}

/// Ordered list of supporting files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless an identical one is already listed.
    pub fn add(&mut self, entry: ManifestEntry) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Remove an entry by identity. Returns true if it was listed.
    pub fn remove(&mut self, entry: &ManifestEntry) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != entry);
        self.entries.len() != before
    }

    pub fn contains(&self, entry: &ManifestEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Find the entry writing `file_name` into `folder`.
    pub fn find(&self, folder: &str, file_name: &str) -> Option<&ManifestEntry> {
        self.entries
            .iter()
            .find(|e| e.folder == folder && e.file_name == file_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ManifestEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = ManifestEntry>>(iter: I) -> Self {
        let mut manifest = Manifest::new();
        for entry in iter {
            manifest.add(entry);
        }
        manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ignores_duplicates() {
        let mut manifest = Manifest::new();
        manifest.add(ManifestEntry::new("Cartfile.tera", "", "Cartfile"));
        manifest.add(ManifestEntry::new("Cartfile.tera", "", "Cartfile"));

        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_remove_matches_full_triple() {
        let mut manifest = Manifest::new();
        manifest.add(ManifestEntry::new("APIs.tera", "Classes", "APIs.swift"));

        assert!(!manifest.remove(&ManifestEntry::new("APIs.tera", "Other", "APIs.swift")));
        assert_eq!(manifest.len(), 1);

        assert!(manifest.remove(&ManifestEntry::new("APIs.tera", "Classes", "APIs.swift")));
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_remove_then_add_with_new_template() {
        let mut manifest = Manifest::new();
        manifest.add(ManifestEntry::new("Models.tera", "Classes", "Models.swift"));
        manifest.add(ManifestEntry::new("APIs.tera", "Classes", "APIs.swift"));

        manifest.remove(&ManifestEntry::new("Models.tera", "Classes", "Models.swift"));
        manifest.add(ManifestEntry::new("MoyaModels.tera", "Classes", "Models.swift"));

        let models: Vec<_> = manifest
            .iter()
            .filter(|e| e.file_name == "Models.swift")
            .collect();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].template, "MoyaModels.tera");
        assert_eq!(
            manifest.find("Classes", "Models.swift").map(|e| e.template.as_str()),
            Some("MoyaModels.tera")
        );
    }

    #[test]
    fn test_order_is_insertion_order() {
        let manifest: Manifest = [
            ManifestEntry::new("b.tera", "", "b"),
            ManifestEntry::new("a.tera", "", "a"),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = manifest.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
