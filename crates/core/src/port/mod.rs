// Port Layer - Interfaces for external dependencies

pub mod transport;

// Re-exports
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

#[cfg(test)]
pub use transport::MockTransport;
