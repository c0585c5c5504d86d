//! # TalentHub - static host for the job board frontend
//!
//! Serves the compiled Leptos bundle and resolves client routes to
//! `index.html`, so every link in the site footer works on a fresh load.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  .env / CLI │────▶│ServerConfig │────▶│ Application │──▶ /health
//! │             │     │             │     │   (axum)    │──▶ dist/* or index.html
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use talenthub::{start_server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env().unwrap();
//!     start_server(&config).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment and CLI configuration
//! - [`telemetry`] - tracing subscriber setup
//! - [`api`] - HTTP server

pub mod error;
pub mod config;
pub mod telemetry;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult, ServerError, ServerResult};

pub use config::ServerConfig;

pub use api::{router, start_server, Application, HealthResponse};
