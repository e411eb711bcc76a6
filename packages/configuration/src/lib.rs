//! Configuration data structures for the [Lead Gateway](https://docs.rs/lead-gateway).
//!
//! The current version for configuration is [`v1`].
//!
//! The configuration is a TOML document. It can be provided in a file or,
//! with priority, in the `LEAD_GATEWAY_CONFIG_TOML` environment variable.
//! Individual options can be overridden with environment variables prefixed
//! with `LEAD_GATEWAY_CONFIG_OVERRIDE_`, using `__` to separate sections. For
//! example `LEAD_GATEWAY_CONFIG_OVERRIDE_CORE__DATABASE__SERVICE_KEY`.
pub mod v1;
pub mod validator;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use lead_gateway_located_error::{DynError, LocatedError};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use thiserror::Error;

/// Default timeout for each lookup against the persistence driver.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// Environment variables

/// The whole `gateway.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "LEAD_GATEWAY_CONFIG_TOML";

/// The `gateway.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "LEAD_GATEWAY_CONFIG_TOML_PATH";

/// Prefix for the environment variables overriding single options.
pub const CONFIG_OVERRIDE_PREFIX: &str = "LEAD_GATEWAY_CONFIG_OVERRIDE_";

/// Path separator used in the override environment variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Core = v1::core::Core;
pub type Database = v1::database::Database;
pub type HttpApi = v1::http_api::HttpApi;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type LogStyle = v1::logging::Style;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    ///
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML} ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    /// The configuration was parsed but some options are incompatible.
    #[error("The configuration is not valid: {source}")]
    Invalid { source: validator::SemanticValidationError },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}

impl From<validator::SemanticValidationError> for Error {
    fn from(source: validator::SemanticValidationError) -> Self {
        Self::Invalid { source }
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct TslConfig {
    /// Path to the SSL certificate file.
    #[serde(default = "TslConfig::default_ssl_cert_path")]
    pub ssl_cert_path: Utf8PathBuf,

    /// Path to the SSL key file.
    #[serde(default = "TslConfig::default_ssl_key_path")]
    pub ssl_key_path: Utf8PathBuf,
}

impl TslConfig {
    #[allow(clippy::unnecessary_wraps)]
    fn default_ssl_cert_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }

    #[allow(clippy::unnecessary_wraps)]
    fn default_ssl_key_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }
}
