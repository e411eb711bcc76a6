//! Gateway domain services.
//!
//! It only contains the [`gateway_factory`], used to build the [`Gateway`]
//! with its dependencies from the application configuration.
use lead_gateway_configuration::Configuration;

use crate::core::Gateway;

/// It returns a new gateway building its dependencies.
///
/// # Panics
///
/// Will panic if gateway cannot be instantiated.
#[must_use]
pub fn gateway_factory(config: &Configuration) -> Gateway {
    match Gateway::new(&config.core) {
        Ok(gateway) => gateway,
        Err(error) => {
            panic!("{}", error)
        }
    }
}
