//! Setup for the main gateway application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does is
//! starting the API server job.
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize logging.
//! 3. Initialize the domain gateway.
use std::sync::Arc;

use lead_gateway_configuration::Configuration;
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::gateway_factory;
use crate::core::Gateway;

/// It loads the configuration from the environment and builds the main
/// domain [`Gateway`] struct.
#[must_use]
pub fn setup() -> (Configuration, Arc<Gateway>) {
    let configuration = initialize_configuration();

    let gateway = initialize_with_configuration(&configuration);

    info!("Configuration:\n{}", configuration.masked().to_toml());

    (configuration, gateway)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> Arc<Gateway> {
    initialize_logging(configuration);
    Arc::new(initialize_gateway(configuration))
}

/// It builds the domain gateway
///
/// The gateway is the domain layer service. It's the entrypoint to read leads
/// on behalf of external integrations.
#[must_use]
pub fn initialize_gateway(config: &Configuration) -> Gateway {
    gateway_factory(config)
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info about logging.
pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
