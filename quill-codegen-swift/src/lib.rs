//! Swift client profiles for the quill client generator.
//!
//! - [`SwiftProfile`] (`swift`) - Alamofire clients
//! - [`MoyaProfile`] (`moya`) - Moya clients, derived from `swift`
//! - [`LoopBackProfile`] (`LoopBackSwift`) - LoopBack clients with optional
//!   Realm persistence

mod loopback;
mod moya;
mod naming;
mod swift;
mod type_mapper;

use quill_codegen::ProfileRegistry;

pub use loopback::{GENERATE_DATA_API, LoopBackProfile, USE_REALM};
pub use moya::MoyaProfile;
pub use naming::{LOOPBACK_EXTRA_RESERVED, SWIFT_RESERVED_WORDS, loopback_names, swift_names};
pub use swift::{PROJECT_NAME, SWIFT_LITERALS, SwiftProfile, source_folder, swift_manifest};
pub use type_mapper::{
    LOOPBACK_TYPE_MAPPING, SWIFT_CONTAINERS, SWIFT_TYPE_MAPPING, loopback_classes,
    loopback_types, swift_classes, swift_types,
};

/// Register every Swift profile.
pub fn register_all(registry: &mut ProfileRegistry) {
    registry.register(SwiftProfile::new());
    registry.register(MoyaProfile::new());
    registry.register(LoopBackProfile::new());
}

/// A registry holding every Swift profile.
pub fn registry() -> ProfileRegistry {
    let mut registry = ProfileRegistry::new();
    register_all(&mut registry);
    registry
}
