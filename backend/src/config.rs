//! Server configuration.
//!
//! Values come from the environment (optionally a `.env` file loaded by
//! `main`) and can be overridden by CLI flags.
//!
//! | Variable          | Default          | Meaning                                  |
//! |-------------------|------------------|------------------------------------------|
//! | `HOST`            | `127.0.0.1`      | Bind address (`0.0.0.0` for public)      |
//! | `PORT`            | `8080`           | Bind port, `0` for an OS-assigned one    |
//! | `DIST_DIR`        | `frontend/dist`  | Compiled frontend bundle                 |
//! | `ALLOWED_ORIGINS` | `*`              | Comma-separated CORS origins             |

use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub host: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Directory holding `index.html` and the wasm bundle
    pub dist_dir: PathBuf,
    /// Allowed CORS origins. "*" allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(host) if host.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(host) => host.trim().to_string(),
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => defaults.port,
        };

        let dist_dir = match lookup("DIST_DIR") {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyDistDir),
            Some(dir) => PathBuf::from(dir.trim()),
            None => defaults.dist_dir,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.allowed_origins);

        Ok(Self {
            host,
            port,
            dist_dir,
            allowed_origins,
        })
    }

    /// Apply CLI flags on top of the environment values.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        dist_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(dist_dir) = dist_dir {
            self.dist_dir = dist_dir;
        }
        self
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// `host:port` string for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert!(config.allows_any_origin());
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", " 9000 "),
            ("DIST_DIR", "/srv/talenthub"),
            ("ALLOWED_ORIGINS", "https://talenthub.com, https://www.talenthub.com,"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/talenthub"));
        assert_eq!(
            config.allowed_origins,
            vec!["https://talenthub.com", "https://www.talenthub.com"]
        );
        assert!(!config.allows_any_origin());
        assert_eq!(config.index_file(), PathBuf::from("/srv/talenthub/index.html"));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));

        let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_empty_values_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("HOST", " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyHost));

        let err = ServerConfig::from_lookup(lookup(&[("DIST_DIR", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDistDir));
    }

    #[test]
    fn test_blank_origins_fall_back_to_any() {
        let config = ServerConfig::from_lookup(lookup(&[("ALLOWED_ORIGINS", " , ")])).unwrap();
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "9000")]))
            .unwrap()
            .with_overrides(None, Some(0), Some(PathBuf::from("dist")));

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 0);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }
}
