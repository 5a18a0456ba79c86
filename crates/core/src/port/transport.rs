// Transport Port
// Abstraction over the HTTP client used by every command

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// HTTP method used by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Fully prepared HTTP request
///
/// `form` is `Some` exactly when the method is POST; the pairs are sent
/// URL-encoded in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub form: Option<Vec<(String, String)>>,
}

impl HttpRequest {
    /// Look up a header value (case-insensitive name)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Look up a form field value
    pub fn form_field(&self, name: &str) -> Option<&str> {
        self.form
            .as_ref()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw HTTP response as seen by the command engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`; empty when the code has none
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// 200 OK response carrying the given body
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, "OK", body)
    }
}

/// Network/IO failure raised by a transport
#[derive(Error, Debug)]
#[error("{source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Transport trait
///
/// Implementations:
/// - ReqwestTransport (copr-infra-http): pooled reqwest client
///
/// Implementations must be safe for concurrent use; one instance is shared
/// by every call made through a session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the raw response
    ///
    /// # Errors
    /// - TransportError if the request could not be completed at the network level
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost/api/".to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            form: None,
        };

        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.form_field("pkgs"), None);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
