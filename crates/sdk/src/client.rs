//! Copr Service Implementation

use copr_core::{Configuration, Result, Session};
use copr_infra_http::{ReqwestTransport, ReqwestTransportBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Factory for Copr sessions
///
/// Each session gets its own pooled HTTP client, shared by every call made
/// through that session.
///
/// # Example
///
/// ```no_run
/// use copr_sdk::{Configuration, CoprService};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = CoprService::new().with_timeout(Duration::from_secs(60));
/// let session = service.new_session(
///     Configuration::default().with_credentials("john", "s3cret"),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoprService {
    transport: ReqwestTransportBuilder,
}

impl CoprService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a per-request deadline to sessions opened from now on
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.timeout(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport = self.transport.user_agent(user_agent);
        self
    }

    /// Open a session against the configured Copr instance
    ///
    /// # Arguments
    ///
    /// * `configuration` - Base URL and optional credentials
    ///
    /// # Errors
    ///
    /// * `CoprError::Transport` if the HTTP client cannot be created
    pub fn new_session(&self, configuration: Configuration) -> Result<Session> {
        let transport: ReqwestTransport = self.transport.clone().build()?;
        debug!(url = %configuration.url(), "Creating Copr session");

        Ok(Session::new(configuration, Arc::new(transport)))
    }
}
