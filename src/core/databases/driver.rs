//! Database driver factory.
//!
//! See [`databases::driver::build`](crate::core::databases::driver::build)
//! function for more information.
use lead_gateway_primitives::DatabaseDriver;

use super::error::Error;
use super::postgrest::Postgrest;
use super::sqlite::Sqlite;
use super::{Builder, Database};

/// It builds a new database driver.
///
/// Example for `SQLite3`:
///
/// ```rust,no_run
/// use lead_gateway::core::databases;
/// use lead_gateway_configuration::Database;
///
/// let config = Database::default();
/// let database = databases::driver::build(&config);
/// ```
///
/// Example for `PostgREST`:
///
/// ```rust,no_run
/// use lead_gateway::core::databases;
/// use lead_gateway_configuration::Database;
/// use lead_gateway_primitives::DatabaseDriver;
///
/// let config = Database {
///     driver: DatabaseDriver::Postgrest,
///     path: "https://project-ref.supabase.co".to_string(),
///     service_key: Some("MyServiceKey".to_string()),
/// };
/// let database = databases::driver::build(&config);
/// ```
///
/// Refer to the [configuration documentation](https://docs.rs/lead-gateway-configuration)
/// for more information about the database configuration.
///
/// > **WARNING**: The driver instantiation creates the database tables.
///
/// # Errors
///
/// This function will return an error if unable to build the driver or to
/// create the database tables.
pub fn build(config: &lead_gateway_configuration::Database) -> Result<Box<dyn Database>, Error> {
    let database = match config.driver {
        DatabaseDriver::Sqlite3 => Builder::<Sqlite>::build(config),
        DatabaseDriver::Postgrest => Builder::<Postgrest>::build(config),
    }?;

    database.create_database_tables()?;

    Ok(database)
}
