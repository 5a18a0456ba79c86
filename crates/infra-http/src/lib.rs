// Copr Infrastructure - HTTP Adapter
// Implements: Transport

pub mod reqwest_transport;

pub use reqwest_transport::{ReqwestTransport, ReqwestTransportBuilder};
