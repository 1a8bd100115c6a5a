use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Every field has a default, so the server starts with zero configuration
/// on port 3000 with the document at `data/database.json`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Path of the JSON document (default: `data/database.json`).
    pub data_file: PathBuf,
    /// Static asset directory served as the fallback (default: `public`).
    pub public_dir: PathBuf,
    /// Directory holding `index.html` and `admin.html` (default: `frontend`).
    pub frontend_dir: PathBuf,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            data_file: PathBuf::from("data").join("database.json"),
            public_dir: PathBuf::from("public"),
            frontend_dir: PathBuf::from("frontend"),
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `HOST`                 | `0.0.0.0`            |
    /// | `PORT`                 | `3000`               |
    /// | `DATA_FILE`            | `data/database.json` |
    /// | `PUBLIC_DIR`           | `public`             |
    /// | `FRONTEND_DIR`         | `frontend`           |
    /// | `CORS_ORIGINS`         | *(any origin)*       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                expected: "u16",
                value: raw,
            })?,
            None => defaults.port,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                expected: "u64",
                value: raw,
            })?,
            None => defaults.request_timeout_secs,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty() && s != "*")
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            data_file: lookup("DATA_FILE").map_or(defaults.data_file, PathBuf::from),
            public_dir: lookup("PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from),
            frontend_dir: lookup("FRONTEND_DIR").map_or(defaults.frontend_dir, PathBuf::from),
            cors_origins,
            request_timeout_secs,
        })
    }
}
