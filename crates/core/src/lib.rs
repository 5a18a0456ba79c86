// Copr Core - Command Execution Framework & Ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{RpcCommand, Session};
pub use domain::{
    BuildRequest, BuildResult, Configuration, DetailRequest, DetailResult, ListRequest,
    ListResult, PlaygroundListRequest, PlaygroundListResult, ProjectId, YumRepository,
};
pub use error::{CoprError, Result};
pub use port::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
