//! The core `gateway` module contains the lead access logic which is
//! independent of the delivery layer.
//!
//! It contains the [`Gateway`] and its dependencies. It's a domain layer
//! which does not specify how the end user connects to the gateway.
//! Typically it's used by the REST API in [`servers::apis`](crate::servers::apis).
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!   Lead REST API |> Gateway |> Database driver
//! ```
//!
//! # Table of contents
//!
//! - [Gateway](#gateway)
//! - [Authentication](#authentication)
//! - [Lookups](#lookups)
//! - [Persistence](#persistence)
//!
//! # Gateway
//!
//! The [`Gateway`] serves one operation: reading a single lead, on behalf of
//! an external integration, with the landing page it was submitted to.
//!
//! ```rust,no_run
//! use lead_gateway::core::services::gateway_factory;
//! use lead_gateway_configuration::Configuration;
//!
//! # async fn run() {
//! let gateway = gateway_factory(&Configuration::default());
//!
//! let lead = gateway.get_lead("L1", Some("secret123")).await;
//! # }
//! ```
//!
//! The result is either the [`Lead`](crate::core::lead::Lead) or an
//! [`Error`](crate::core::error::Error). The delivery layer only needs the
//! error [`kind`](crate::core::error::Error::kind) to build its response.
//!
//! # Authentication
//!
//! Refer to [`auth`] module for more information about how the integration
//! API key is verified.
//!
//! The gateway always authenticates before reading the lead. A request
//! without a valid key never learns whether the lead exists.
//!
//! # Lookups
//!
//! Every read goes to the database. There is no cache: a configuration
//! deactivated in the backend stops authenticating on the next request.
//!
//! Each read is bounded by the `lookup_timeout` of the core configuration:
//!
//! ```toml
//! [core]
//! lookup_timeout = 5
//! ```
//!
//! Failed and timed out reads are logged and reported as internal errors.
//!
//! # Persistence
//!
//! Refer to [`databases`] module for more information about persistence.
pub mod auth;
pub mod databases;
pub mod error;
pub mod lead;
pub mod services;

use std::future::Future;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use self::auth::ApiKey;
use self::error::{Error, ErrorKind, Resource};
use self::lead::{ActiveConfiguration, Lead};
use crate::core::databases::Database;

/// The domain layer gateway service.
///
/// It authenticates integration requests and reads leads on their behalf.
///
/// > **NOTICE**: the `Gateway` is not responsible for handling the network
/// > layer. It does not know how the API key reached it.
pub struct Gateway {
    /// A database driver implementation: [`Sqlite`](crate::core::databases::sqlite)
    /// or [`Postgrest`](crate::core::databases::postgrest)
    pub database: Arc<Box<dyn Database>>,
    lookup_timeout: Duration,
}

impl Gateway {
    /// `Gateway` constructor.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to build the
    /// database driver.
    pub fn new(config: &lead_gateway_configuration::Core) -> Result<Gateway, databases::error::Error> {
        let database = Arc::new(databases::driver::build(&config.database)?);

        Ok(Self::with_database(database, config.lookup_timeout()))
    }

    /// It builds the gateway on an already built database driver.
    #[must_use]
    pub fn with_database(database: Arc<Box<dyn Database>>, lookup_timeout: Duration) -> Gateway {
        Gateway {
            database,
            lookup_timeout,
        }
    }

    /// It checks the provided API key against the active configuration.
    ///
    /// # Context: Authentication
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `MissingCredential` if the key is absent or empty.
    /// - `InvalidCredential` if there is no active configuration or the key
    ///   does not match it.
    /// - An internal error if the active configuration cannot be read.
    pub async fn authenticate(&self, provided_key: Option<&str>) -> Result<(), Error> {
        let api_key = ApiKey::from_provided(provided_key)?;

        let active_configuration = self.get_active_configuration().await.map_err(logged)?;

        api_key.verify(active_configuration.as_ref())
    }

    /// It returns the lead with the given id, if the API key is valid.
    ///
    /// # Context: Leads
    ///
    /// # Errors
    ///
    /// Will return an authentication error (see [`Gateway::authenticate`]),
    /// `LeadNotFound` if there is no lead with that id, or an internal error
    /// if the lead cannot be read.
    pub async fn get_lead(&self, lead_id: &str, provided_key: Option<&str>) -> Result<Lead, Error> {
        self.authenticate(provided_key).await?;

        let lead = self
            .lookup(Resource::Lead, self.database.get_lead_with_landing_page(lead_id))
            .await
            .map_err(logged)?;

        match lead {
            Some(lead) => Ok(lead),
            None => {
                debug!(lead_id, "lead not found");
                Err(Error::LeadNotFound {
                    lead_id: lead_id.to_string(),
                    location: Location::caller(),
                })
            }
        }
    }

    /// It drops the database tables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    pub fn drop_database_tables(&self) -> Result<(), databases::error::Error> {
        self.database.drop_database_tables()
    }

    async fn get_active_configuration(&self) -> Result<Option<ActiveConfiguration>, Error> {
        let configurations = self
            .lookup(Resource::ActiveConfiguration, self.database.get_active_configurations())
            .await?;

        if configurations.len() > 1 {
            warn!("more than one configuration is flagged as active, using the first one");
        }

        Ok(configurations.into_iter().next())
    }

    async fn lookup<T, F>(&self, resource: Resource, future: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, databases::error::Error>>,
    {
        match tokio::time::timeout(self.lookup_timeout, future).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(Error::LookupFailed { resource, source }),
            Err(_) => Err(Error::LookupTimedOut {
                resource,
                timeout: self.lookup_timeout,
                location: Location::caller(),
            }),
        }
    }
}

/// Internal errors are only reported to the log.
fn logged(err: Error) -> Error {
    if err.kind() == ErrorKind::Internal {
        error!(%err, "lead lookup failed");
    }
    err
}
