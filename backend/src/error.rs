//! Error types for the TalentHub static server.
//!
//! - [`ConfigError`] - Bad environment or CLI values
//! - [`ServerError`] - Startup and serving errors
//!
//! Conversion is automatic via `From`, so `?` works from config loading
//! straight through to `main`.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT is not a valid u16.
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    /// HOST is empty.
    #[error("HOST must not be empty")]
    EmptyHost,

    /// DIST_DIR is empty.
    #[error("DIST_DIR must not be empty")]
    EmptyDistDir,
}

// =============================================================================
// Server Errors
// =============================================================================

/// Errors while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The frontend bundle directory does not exist.
    #[error("Frontend bundle not found at {0} (run `trunk build` in frontend/)")]
    MissingDist(PathBuf),

    /// The bundle has no index.html to fall back to.
    #[error("No index.html in {0}")]
    MissingIndex(PathBuf),

    /// Could not bind the listening socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error while serving.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: ServerError = ConfigError::InvalidPort("http".into()).into();
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("http"));
    }

    #[test]
    fn test_missing_dist_mentions_path() {
        let err = ServerError::MissingDist(PathBuf::from("frontend/dist"));
        assert!(err.to_string().contains("frontend/dist"));
    }
}
