//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and resolves the password
//! hash from the environment. `AppConfig` is the root configuration struct;
//! the credential is deliberately kept out of it so the hash never travels
//! through `Debug` formatting of the config.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Home page - static shell, safe to cache briefly
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// State endpoints must always be fresh - a cached toggle response would
/// misreport the flag.
pub const CACHE_CONTROL_STATE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "statusd=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Environment variable holding the bcrypt hash of the toggle password
pub const PASSWORD_HASH_ENV: &str = "STATUSD_PASSWORD_HASH";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        5002
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Site title shown on the status page. Defaults to the crate name.
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "UiConfig::default_version")]
    pub version: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            version: Self::default_version(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        env!("CARGO_PKG_NAME").to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error - every setting has a usable default.
    /// A file that exists but does not parse is a startup error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Read the bcrypt password hash from the environment.
///
/// Absence is a fatal misconfiguration: starting without a credential would
/// leave the toggle endpoint permanently rejecting, which looks like a bug in
/// production rather than the deployment error it is.
pub fn load_password_hash() -> Result<String, ConfigError> {
    load_password_hash_from(PASSWORD_HASH_ENV)
}

fn load_password_hash_from(var: &'static str) -> Result<String, ConfigError> {
    let hash = std::env::var(var).map_err(|_| ConfigError::MissingPasswordHash(var))?;
    if hash.trim().is_empty() {
        return Err(ConfigError::MissingPasswordHash(var));
    }
    Ok(hash)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0} must be set to a bcrypt password hash")]
    MissingPasswordHash(&'static str),
    #[error("{0} does not hold a valid bcrypt hash")]
    InvalidPasswordHash(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 5002);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn load_reads_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[http]\nport = 8080\n").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 8080);
        // unspecified sections keep defaults
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.ui.site_name, "statusd");
    }

    #[test]
    fn unset_password_hash_env_is_fatal() {
        // dedicated variable name so parallel tests cannot race on it
        assert!(matches!(
            load_password_hash_from("STATUSD_TEST_HASH_UNSET"),
            Err(ConfigError::MissingPasswordHash(_))
        ));
    }

    #[test]
    fn blank_password_hash_env_is_fatal() {
        std::env::set_var("STATUSD_TEST_HASH_BLANK", "   ");
        assert!(matches!(
            load_password_hash_from("STATUSD_TEST_HASH_BLANK"),
            Err(ConfigError::MissingPasswordHash(_))
        ));
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[http\nport = oops").unwrap();

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
