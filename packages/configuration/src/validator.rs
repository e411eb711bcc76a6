//! Trait to validate semantic errors.
//!
//! Errors could involve more than one configuration option. Some configuration
//! combinations can be incompatible.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SemanticValidationError {
    #[error("The `postgrest` database driver requires a `service_key` in the database section.")]
    MissingServiceKey,

    #[error("The lookup timeout must be greater than zero seconds.")]
    ZeroLookupTimeout,
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
