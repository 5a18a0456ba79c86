// Domain Layer - Configuration, requests and results

pub mod configuration;
pub mod request;
pub mod result;

// Re-exports
pub use configuration::{Configuration, DEFAULT_URL};
pub use request::{BuildRequest, DetailRequest, ListRequest, PlaygroundListRequest};
pub use result::{
    BuildResult, DetailResult, ListResult, PlaygroundListResult, ProjectId, YumRepository,
};
