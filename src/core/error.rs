//! Error returned by the core [`Gateway`](crate::core::Gateway).
//!
//! Error | Kind | Description
//! ---|---|---
//! `MissingCredential` | Unauthorized | The request did not include an API key.
//! `InvalidCredential` | Unauthorized | The API key does not match the active configuration, or there is no active configuration.
//! `LeadNotFound` | Not found | There is no lead with the requested id.
//! `LookupFailed` | Internal | The persistence driver failed.
//! `LookupTimedOut` | Internal | The persistence driver did not answer in time.
//!
//! Only the [`ErrorKind`] reaches API consumers. The error itself, with its
//! source and location, is only written to the log.
use std::panic::Location;
use std::time::Duration;

use derive_more::Display;

use super::databases;

/// The record a lookup was trying to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Resource {
    #[display("active configuration")]
    ActiveConfiguration,
    #[display("lead")]
    Lead,
}

/// Authentication or lookup error returned by the core `Gateway`.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    // Authentication errors
    #[error("The request does not include an API key, {location}")]
    MissingCredential { location: &'static Location<'static> },

    #[error("The supplied API key does not match the active configuration, {location}")]
    InvalidCredential { location: &'static Location<'static> },

    // Lookup errors
    #[error("The lead: {lead_id}, was not found, {location}")]
    LeadNotFound {
        lead_id: String,
        location: &'static Location<'static>,
    },

    #[error("Failed to look up the {resource}: {source}")]
    LookupFailed {
        resource: Resource,
        source: databases::error::Error,
    },

    #[error("Timed out after {timeout:?} looking up the {resource}, {location}")]
    LookupTimedOut {
        resource: Resource,
        timeout: Duration,
        location: &'static Location<'static>,
    },
}

/// The classes of errors API consumers can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    Internal,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingCredential { .. } | Error::InvalidCredential { .. } => ErrorKind::Unauthorized,
            Error::LeadNotFound { .. } => ErrorKind::NotFound,
            Error::LookupFailed { .. } | Error::LookupTimedOut { .. } => ErrorKind::Internal,
        }
    }
}
