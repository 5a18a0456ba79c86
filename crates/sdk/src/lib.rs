//! Copr SDK - Rust Client Library
//!
//! Provides a session-based client for the Copr build service JSON API.
//!
//! # Example
//!
//! ```no_run
//! use copr_sdk::{Configuration, CoprService, ListRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Open a session
//!     let service = CoprService::new();
//!     let session = service.new_session(Configuration::new("https://copr.fedoraproject.org"))?;
//!
//!     // List the projects of a user
//!     let result = session.list(&ListRequest::new("msuchy")).await?;
//!     for project in result.projects {
//!         println!("{}", project);
//!     }
//!
//!     session.close();
//!     Ok(())
//! }
//! ```

mod client;
mod config_loader;

pub use client::CoprService;
pub use config_loader::{ConfigError, ConfigLoader, CONFIG_FILE_NAME};
pub use copr_core::{
    BuildRequest, BuildResult, Configuration, CoprError, DetailRequest, DetailResult,
    ListRequest, ListResult, PlaygroundListRequest, PlaygroundListResult, ProjectId, Result,
    Session, YumRepository,
};
pub use copr_core::domain::DEFAULT_URL;
pub use copr_infra_http::{ReqwestTransport, ReqwestTransportBuilder};
