//! Integration API key verification.
//!
//! External integrations authenticate with a single shared secret: the
//! `integration_api_key` of the [`ActiveConfiguration`]. The key is sent in
//! the `x-api-key` request header.
//!
//! Verification runs in two steps:
//!
//! 1. [`ApiKey::from_provided`] rejects a missing or empty key.
//! 2. [`ApiKey::verify`] compares the key with the active configuration.
//!    There is nothing to compare with when no configuration is active, so
//!    the key is rejected too.
//!
//! Only the active configuration takes part in the comparison. A key that
//! belongs to an inactive configuration is never accepted.
//!
//! ```rust
//! use lead_gateway::core::auth::ApiKey;
//! use lead_gateway::core::lead::ActiveConfiguration;
//!
//! let active = ActiveConfiguration::new("secret123".to_string());
//!
//! let api_key = ApiKey::from_provided(Some("secret123")).unwrap();
//!
//! assert!(api_key.verify(Some(&active)).is_ok());
//! assert!(ApiKey::from_provided(Some("")).is_err());
//! ```
//!
//! > **NOTICE**: the comparison is a plain string equality, it is not
//! > constant-time.
use std::fmt;
use std::panic::Location;

use super::error::Error;
use super::lead::ActiveConfiguration;

/// The API key provided by the client.
///
/// It never shows its value in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl ApiKey {
    /// It builds the key from the raw header value.
    ///
    /// # Errors
    ///
    /// Will return a `MissingCredential` error if the key is absent or empty.
    #[track_caller]
    pub fn from_provided(provided_key: Option<&str>) -> Result<Self, Error> {
        match provided_key {
            Some(key) if !key.is_empty() => Ok(Self(key.to_owned())),
            _ => Err(Error::MissingCredential {
                location: Location::caller(),
            }),
        }
    }

    /// It checks the key against the active configuration.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidCredential` error if there is no active
    /// configuration or its key is not exactly the same (case-sensitive).
    #[track_caller]
    pub fn verify(&self, active_configuration: Option<&ActiveConfiguration>) -> Result<(), Error> {
        match active_configuration {
            Some(configuration) if configuration.integration_api_key == self.0 => Ok(()),
            _ => Err(Error::InvalidCredential {
                location: Location::caller(),
            }),
        }
    }
}
