// Application Layer - Command execution and the session façade

pub mod command;
pub mod session;

// Re-exports
pub use command::{Envelope, RpcCommand};
pub use session::Session;
