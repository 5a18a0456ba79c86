// reqwest Transport implementation
// reason: reqwest::Client owns the connection pool and is safe to share across tasks
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::trace;

use copr_core::port::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

const DEFAULT_USER_AGENT: &str = concat!("copr-client/", env!("CARGO_PKG_VERSION"));

/// Transport backed by a single pooled `reqwest::Client`
///
/// Cloning is cheap and clones share the pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Transport with default settings (no request timeout)
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wrap an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// Builder for [`ReqwestTransport`]
#[derive(Debug, Clone)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ReqwestTransportBuilder {
    /// Total per-request deadline; unset means none
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<ReqwestTransport, TransportError> {
        let mut builder = Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(TransportError::new)?;
        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder.send().await.map_err(TransportError::new)?;
        let status = response.status();
        let body = response.bytes().await.map_err(TransportError::new)?;

        trace!(
            url = %request.url,
            status = status.as_u16(),
            bytes = body.len(),
            "HTTP response received"
        );

        // The phrase sent by the server is not exposed; use the registered one
        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}
