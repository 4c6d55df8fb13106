//! Built-in pipeline phases, in execution order.

mod build;
mod examples;
mod group;
mod model;
mod property;

pub use build::BuildPhase;
pub use examples::ExamplePhase;
pub use group::{GroupPhase, select_successful_response, strip_resource_path};
pub use model::ModelPhase;
pub use property::PropertyPhase;
