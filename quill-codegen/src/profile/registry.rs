use super::Profile;
use crate::{Error, Result};

/// Profiles available for selection, in registration order.
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: Vec<Box<dyn Profile>>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile. A later profile with the same name replaces the
    /// earlier one.
    pub fn register(&mut self, profile: impl Profile + 'static) {
        self.profiles.retain(|p| p.name() != profile.name());
        self.profiles.push(Box::new(profile));
    }

    /// Select a profile by its stable name.
    pub fn get(&self, name: &str) -> Result<&dyn Profile> {
        self.profiles
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
            .ok_or_else(|| Error::UnknownProfile {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Profile> {
        self.profiles.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
