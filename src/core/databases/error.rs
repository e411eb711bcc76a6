//! Database errors.
//!
//! This module contains the [Database errors](crate::core::databases::error::Error).
use std::panic::Location;
use std::sync::Arc;

use lead_gateway_located_error::{DynError, Located, LocatedError};
use lead_gateway_primitives::DatabaseDriver;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The query unexpectedly returned nothing.
    #[error("The {driver} query unexpectedly returned nothing: {source}")]
    QueryReturnedNoRows {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
        driver: DatabaseDriver,
    },

    /// The query was malformed.
    #[error("The {driver} query was malformed: {source}")]
    InvalidQuery {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
        driver: DatabaseDriver,
    },

    /// A stored record could not be decoded.
    #[error("The {driver} record could not be decoded: {source}")]
    InvalidRecord {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
        driver: DatabaseDriver,
    },

    /// Unable to insert a record into the database
    #[error("Unable to insert record into {driver} database, {location}")]
    InsertFailed {
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// The request to the remote backend could not be completed.
    #[error("The {driver} request failed: {source}")]
    RequestFailed {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
        driver: DatabaseDriver,
    },

    /// The remote backend answered with an error status.
    #[error("The {driver} backend answered with status {status}: {body}, {location}")]
    UnexpectedStatus {
        status: u16,
        body: String,
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// The driver configuration is not usable.
    #[error("Invalid {driver} database configuration: {reason}, {location}")]
    InvalidConfiguration {
        reason: String,
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// The blocking task running the query did not complete.
    #[error("The {driver} query task failed: {source}")]
    QueryTaskFailed {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
        driver: DatabaseDriver,
    },

    /// Unable to create a connection pool
    #[error("Failed to create r2d2 {driver} connection pool: {source}")]
    ConnectionPool {
        source: LocatedError<'static, r2d2::Error>,
        driver: DatabaseDriver,
    },
}

impl From<r2d2_sqlite::rusqlite::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_sqlite::rusqlite::Error) -> Self {
        match err {
            r2d2_sqlite::rusqlite::Error::QueryReturnedNoRows => Error::QueryReturnedNoRows {
                source: (Arc::new(err) as DynError).into(),
                driver: DatabaseDriver::Sqlite3,
            },
            _ => Error::InvalidQuery {
                source: (Arc::new(err) as DynError).into(),
                driver: DatabaseDriver::Sqlite3,
            },
        }
    }
}

impl From<reqwest::Error> for Error {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let e: DynError = Arc::new(err);
        Error::RequestFailed {
            source: e.into(),
            driver: DatabaseDriver::Postgrest,
        }
    }
}

impl From<(serde_json::Error, DatabaseDriver)> for Error {
    #[track_caller]
    fn from(e: (serde_json::Error, DatabaseDriver)) -> Self {
        let (err, driver) = e;
        Error::InvalidRecord {
            source: (Arc::new(err) as DynError).into(),
            driver,
        }
    }
}

impl From<(tokio::task::JoinError, DatabaseDriver)> for Error {
    #[track_caller]
    fn from(e: (tokio::task::JoinError, DatabaseDriver)) -> Self {
        let (err, driver) = e;
        Error::QueryTaskFailed {
            source: (Arc::new(err) as DynError).into(),
            driver,
        }
    }
}

impl From<(r2d2::Error, DatabaseDriver)> for Error {
    #[track_caller]
    fn from(e: (r2d2::Error, DatabaseDriver)) -> Self {
        let (err, driver) = e;
        Self::ConnectionPool {
            source: Located(err).into(),
            driver,
        }
    }
}
