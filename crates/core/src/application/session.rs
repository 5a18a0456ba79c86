//! Copr Session
//!
//! Caller-facing handle bundling one [`Configuration`] with one shared
//! [`Transport`]. Every operation builds the matching [`RpcCommand`] and
//! runs it through the same transport, so connections are reused across
//! calls. A session is `Send + Sync`; wrap it in an `Arc` to call it from
//! several tasks at once.

use std::sync::{Arc, RwLock};
use tracing::info;

use crate::application::command::RpcCommand;
use crate::domain::{
    BuildRequest, BuildResult, Configuration, DetailRequest, DetailResult, ListRequest,
    ListResult, PlaygroundListRequest, PlaygroundListResult,
};
use crate::error::{CoprError, Result};
use crate::port::Transport;

/// Session with explicit Open -> Closed lifecycle
pub struct Session {
    configuration: Configuration,
    // None once closed
    transport: RwLock<Option<Arc<dyn Transport>>>,
}

impl Session {
    /// Open a session over an existing transport
    pub fn new(configuration: Configuration, transport: Arc<dyn Transport>) -> Self {
        info!(url = %configuration.url(), "Copr session opened");
        Self {
            configuration,
            transport: RwLock::new(Some(transport)),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn is_open(&self) -> bool {
        self.transport
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// Release the transport
    ///
    /// Calls already in flight finish on the transport they started with;
    /// later calls fail with `SessionClosed`. Closing twice is a no-op.
    pub fn close(&self) {
        let released = self
            .transport
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        if released.is_some() {
            info!(url = %self.configuration.url(), "Copr session closed");
        }
    }

    /// `GET /api/coprs/{user}/`
    pub async fn list(&self, request: &ListRequest) -> Result<ListResult> {
        self.dispatch(RpcCommand::list(request)).await
    }

    /// `GET /api/playground/list/`
    pub async fn playground_list(
        &self,
        request: &PlaygroundListRequest,
    ) -> Result<PlaygroundListResult> {
        self.dispatch(RpcCommand::playground_list(request)).await
    }

    /// `GET /api/coprs/{user}/{project}/detail/`
    pub async fn detail(&self, request: &DetailRequest) -> Result<DetailResult> {
        self.dispatch(RpcCommand::detail(request)).await
    }

    /// `POST /api/coprs/{user}/{project}/new_build/`
    ///
    /// # Errors
    /// - CoprError::AuthenticationMissing if login or token is not configured
    pub async fn build(&self, request: &BuildRequest) -> Result<BuildResult> {
        self.dispatch(RpcCommand::build(request)).await
    }

    async fn dispatch<T>(&self, command: RpcCommand<T>) -> Result<T> {
        let transport = self.transport()?;
        command
            .execute(&self.configuration, transport.as_ref())
            .await
    }

    fn transport(&self) -> Result<Arc<dyn Transport>> {
        self.transport
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or(CoprError::SessionClosed)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("url", &self.configuration.url())
            .field("open", &self.is_open())
            .finish()
    }
}
