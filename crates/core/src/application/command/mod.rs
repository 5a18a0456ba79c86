//! Command Execution Engine
//!
//! A Copr RPC call is described by an [`RpcCommand`]: the path below the
//! configured base URL, the optional form arguments, whether credentials
//! are required, and the payload decoder. The engine owns everything else:
//! authentication, headers, status check, envelope check. Operations only
//! supply data and a decoder; none of them performs I/O.

mod build;
mod detail;
pub mod envelope;
mod list;
mod playground;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, warn};

use crate::domain::Configuration;
use crate::error::{CoprError, Result};
use crate::port::{HttpMethod, HttpRequest, Transport};

pub use envelope::Envelope;

pub const ACCEPT_JSON: &str = "application/json";
const HTTP_OK: u16 = 200;

/// Form arguments of a POST command, in wire order
pub type FormArgs = Vec<(String, String)>;

/// Operation-specific payload decoder
pub type Decoder<T> = Box<dyn FnOnce(&Envelope) -> Result<T> + Send>;

/// One RPC operation, ready to run against a session's configuration and transport
pub struct RpcCommand<T> {
    name: &'static str,
    path: String,
    form: Option<FormArgs>,
    requires_auth: bool,
    decode: Decoder<T>,
}

impl<T> RpcCommand<T> {
    /// Create a GET command without authentication
    pub fn new(
        name: &'static str,
        path: impl Into<String>,
        decode: impl FnOnce(&Envelope) -> Result<T> + Send + 'static,
    ) -> Self {
        Self {
            name,
            path: path.into(),
            form: None,
            requires_auth: false,
            decode: Box::new(decode),
        }
    }

    /// Send the command as a POST carrying these form arguments
    ///
    /// An empty vector still turns the command into a POST.
    pub fn with_form(mut self, form: FormArgs) -> Self {
        self.form = Some(form);
        self
    }

    /// Require login and token from the configuration
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn form(&self) -> Option<&FormArgs> {
        self.form.as_ref()
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn method(&self) -> HttpMethod {
        if self.form.is_some() {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        }
    }

    /// Build the HTTP request for this command
    ///
    /// # Errors
    /// - CoprError::AuthenticationMissing if credentials are required but login or token is absent/empty
    pub fn prepare(&self, configuration: &Configuration) -> Result<HttpRequest> {
        let url = format!("{}{}", configuration.url(), self.path);

        let mut headers = Vec::with_capacity(2);
        if self.requires_auth {
            headers.push(("Authorization".to_string(), basic_auth(configuration)?));
        }
        headers.push(("Accept".to_string(), ACCEPT_JSON.to_string()));

        Ok(HttpRequest {
            method: self.method(),
            url,
            headers,
            form: self.form.clone(),
        })
    }

    /// Run one RPC round trip
    ///
    /// Credentials are checked before the transport is touched. A non-200
    /// status is reported without looking at the body.
    pub async fn execute(self, configuration: &Configuration, transport: &dyn Transport) -> Result<T> {
        let name = self.name;
        let request = self.prepare(configuration).inspect_err(|e| {
            warn!(command = name, error = %e, "Copr RPC rejected before sending");
        })?;

        let method = request.method;
        let url = request.url.clone();
        debug!(command = name, %method, url = %url, "Calling Copr RPC");

        let result = self.round_trip(request, transport).await;
        match &result {
            Ok(_) => debug!(command = name, url = %url, "Copr RPC succeeded"),
            Err(e) => warn!(
                command = name,
                %method,
                url = %url,
                status = e.http_status(),
                error = %e,
                "Copr RPC failed"
            ),
        }
        result
    }

    async fn round_trip(self, request: HttpRequest, transport: &dyn Transport) -> Result<T> {
        let response = transport.send(request).await?;

        if response.status != HTTP_OK {
            return Err(CoprError::Http {
                status: response.status,
                reason: response.reason,
            });
        }

        let envelope = Envelope::from_body(&response.body)?;
        (self.decode)(&envelope)
    }
}

impl<T> std::fmt::Debug for RpcCommand<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcCommand")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("form", &self.form)
            .field("requires_auth", &self.requires_auth)
            .finish_non_exhaustive()
    }
}

fn basic_auth(configuration: &Configuration) -> Result<String> {
    // Missing login and missing token share one error
    let login = configuration
        .login()
        .filter(|l| !l.is_empty())
        .ok_or(CoprError::AuthenticationMissing)?;
    let token = configuration
        .token()
        .filter(|t| !t.is_empty())
        .ok_or(CoprError::AuthenticationMissing)?;

    let encoded = BASE64.encode(format!("{}:{}", login, token));
    Ok(format!("Basic {}", encoded))
}
