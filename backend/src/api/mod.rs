//! HTTP API module.
//!
//! The static bundle server and its response types.

pub mod server;
pub mod types;

pub use server::{router, start_server, Application};
pub use types::*;
