//! statusd - a tiny HTTP service around one shared flag.
//!
//! Exposes a single two-valued status flag: anyone may read it, and a caller
//! presenting the correct password over HTTP Basic auth may toggle it. The
//! flag is in-memory only and resets to `inactive` on restart.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::AppError;
