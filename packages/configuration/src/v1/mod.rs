//! Configuration data structures for the Lead Gateway.
//!
//! This module contains the configuration data structures for the gateway.
//! The configuration is split into sections:
//!
//! - [`logging`]: the logging threshold and output style.
//! - [`core`]: the gateway core, including the [`database`] driver.
//! - [`http_api`]: the HTTP API serving the leads.
//!
//! # Sample configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "default"
//!
//! [core]
//! lookup_timeout = 5
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/lead-gateway/lib/database/sqlite3.db"
//!
//! [http_api]
//! bind_address = "0.0.0.0:1212"
//! ```
//!
//! For the hosted backend, use the `postgrest` driver with the project URL
//! and a service key:
//!
//! ```toml
//! [core.database]
//! driver = "postgrest"
//! path = "https://project-ref.supabase.co"
//! service_key = "MyServiceKey"
//! ```
//!
//! Prefer injecting the service key with the
//! `LEAD_GATEWAY_CONFIG_OVERRIDE_CORE__DATABASE__SERVICE_KEY` environment
//! variable instead of writing it in the file.
//!
//! # HTTPS
//!
//! Add a `tsl_config` section to serve the API over HTTPS:
//!
//! ```toml
//! [http_api.tsl_config]
//! ssl_cert_path = "./storage/lead-gateway/lib/tls/localhost.crt"
//! ssl_key_path = "./storage/lead-gateway/lib/tls/localhost.key"
//! ```
pub mod core;
pub mod database;
pub mod http_api;
pub mod logging;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use lead_gateway_primitives::DatabaseDriver;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the gateway.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default)]
    pub core: Core,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct. The whole
    /// configuration in toml format is included in the `info.config_toml`
    /// string when it was provided with the environment variable, otherwise
    /// it's read from `info.config_toml_path`.
    ///
    /// Environment variables with the [`CONFIG_OVERRIDE_PREFIX`] prefix
    /// override the values from the TOML source.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the TOML is not valid, an option has a bad value,
    /// or the options are incompatible with each other.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Toml::string(config_toml))
        } else {
            Figment::from(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }

    /// A copy of the configuration with every secret replaced by `***`.
    #[must_use]
    pub fn masked(&self) -> Configuration {
        let mut masked = self.clone();
        masked.core.database.mask_secrets();
        masked
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.core.database.driver == DatabaseDriver::Postgrest && self.core.database.service_key.is_none() {
            return Err(SemanticValidationError::MissingServiceKey);
        }

        if self.core.lookup_timeout == 0 {
            return Err(SemanticValidationError::ZeroLookupTimeout);
        }

        Ok(())
    }
}
