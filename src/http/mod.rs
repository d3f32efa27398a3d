//! HTTP server startup and lifecycle.

pub mod server;
pub mod shutdown;

pub use server::{start_server, ServerError};
