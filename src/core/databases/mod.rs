//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite): a local file, for
//!   development and tests.
//! - [`Postgrest`](crate::core::databases::postgrest::Postgrest): the REST
//!   interface of the hosted Postgres backend.
//!
//! The gateway only reads. The write methods exist to seed records in local
//! databases and tests.
//!
//! > **NOTICE**: There are no database migrations. The `postgrest` schema is
//! > owned by the hosted backend.
//!
//! The persistent objects are:
//!
//! - [Configurations](#configurations)
//! - [Landing pages](#landing-pages)
//! - [Leads](#leads)
//!
//! # Configurations
//!
//! Field                 | Sample data  | Description
//! ---|---|---
//! `id`                  | 1            | Autoincrement id
//! `integration_api_key` | `secret123`  | Shared secret for external integrations
//! `is_active`           | 1            | Whether this is the authoritative configuration
//!
//! > **NOTICE**: more than one configuration could be flagged as active.
//! > The gateway uses the first one and logs a warning.
//!
//! # Landing pages
//!
//! Field   | Sample data | Description
//! ---|---|---
//! `id`    | `P1`        | Opaque id
//! `title` | `Launch`    | Page title
//! `slug`  | `launch`    | URL slug
//!
//! # Leads
//!
//! Field             | Sample data             | Description
//! ---|---|---
//! `id`              | `L1`                    | Opaque id
//! `created_at`      | `2024-01-01T00:00:00Z`  | Creation timestamp
//! `landing_page_id` | `P1`                    | The landing page the form belongs to
//! `data`            | `{"name":"Ana"}`        | JSON object with the submitted form values
pub mod driver;
pub mod error;
pub mod postgrest;
pub mod sqlite;

use std::marker::PhantomData;

use async_trait::async_trait;

use self::error::Error;
use crate::core::lead::{ActiveConfiguration, LandingPage, Lead};

/// Maximum number of active configurations read on each lookup. Reading more
/// than one lets the gateway notice ambiguous configurations.
pub const ACTIVE_CONFIGURATIONS_LIMIT: usize = 2;

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// .
    ///
    /// # Errors
    ///
    /// Will return `Error` if the driver cannot be built with the configuration.
    pub(self) fn build(config: &lead_gateway_configuration::Database) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(config)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the database.
#[async_trait]
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `Error` if the configuration is not valid for the driver.
    fn new(config: &lead_gateway_configuration::Database) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Configurations

    /// It loads the configurations flagged as active, at most
    /// [`ACTIVE_CONFIGURATIONS_LIMIT`], in a stable order.
    ///
    /// # Context: Configurations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn get_active_configurations(&self) -> Result<Vec<ActiveConfiguration>, Error>;

    /// It adds a configuration.
    ///
    /// # Context: Configurations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    async fn add_configuration(&self, integration_api_key: &str, is_active: bool) -> Result<usize, Error>;

    // Landing pages

    /// It adds a landing page.
    ///
    /// # Context: Landing pages
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    async fn add_landing_page(&self, landing_page: &LandingPage) -> Result<usize, Error>;

    // Leads

    /// It gets a lead joined with its landing page projection.
    ///
    /// It returns `Some(Lead)` if a lead with the given id exists, `None`
    /// otherwise.
    ///
    /// # Context: Leads
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load or the stored record is malformed.
    async fn get_lead_with_landing_page(&self, lead_id: &str) -> Result<Option<Lead>, Error>;

    /// It adds a lead. Only the `landing_page_id` is stored, the
    /// `landing_page` projection is ignored.
    ///
    /// # Context: Leads
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    async fn add_lead(&self, lead: &Lead) -> Result<usize, Error>;
}
