//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `LEAD_GATEWAY_`.
use lead_gateway_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/gateway.development.sqlite3.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `gateway.toml`.
/// 2. Environment variable: `LEAD_GATEWAY_CONFIG_TOML`. The variable contains the same contents as the `gateway.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](https://docs.rs/lead-gateway-configuration) for the configuration options.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./gateway.toml` file or the env var `LEAD_GATEWAY_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string()).expect("it should load the configuration info");

    Configuration::load(&info).unwrap_or_else(|err| panic!("Configuration error: {err}"))
}
