//! Gateway configuration factories for testing.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use lead_gateway_configuration::{Configuration, Threshold};
use lead_gateway_primitives::DatabaseDriver;

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one gateway at the same time.
///
/// - The API binds to a port chosen by the operating system.
/// - The database is a new `SQLite3` file in the temp directory.
/// - Logging is disabled.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for API
    let api_port = 0u16;
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), api_port);

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("data_{random_db_id}.db"));
    config.core.database.driver = DatabaseDriver::Sqlite3;
    temp_file.to_str().unwrap().clone_into(&mut config.core.database.path);

    config
}

/// Ephemeral configuration pointing the `postgrest` driver to `base_url`.
#[must_use]
pub fn ephemeral_with_postgrest(base_url: &str, service_key: &str) -> Configuration {
    let mut config = ephemeral();

    config.core.database.driver = DatabaseDriver::Postgrest;
    config.core.database.path = base_url.to_string();
    config.core.database.service_key = Some(service_key.to_string());

    config
}
