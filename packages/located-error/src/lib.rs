//! Error decorator that remembers where an error was raised.
//!
//! Store and configuration errors are wrapped before they travel up to the
//! API layer. The wrapper keeps the original error as its `source` and adds
//! the caller location, so the operator log points at the exact line that
//! turned a driver failure into a gateway failure.
//!
//! ```rust
//! use lead_gateway_located_error::{Located, LocatedError};
//!
//! #[derive(thiserror::Error, Debug)]
//! enum StoreError {
//!     #[error("connection refused")]
//!     Unreachable,
//! }
//!
//! let located: LocatedError<StoreError> = Located(StoreError::Unreachable).into();
//!
//! assert!(located.to_string().starts_with("connection refused, "));
//! assert!(located.location().file().ends_with("lib.rs"));
//! ```
use std::error::Error;
use std::panic::Location;
use std::sync::Arc;

use tracing::debug;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Marker wrapper. Converting it `into` a [`LocatedError`] captures the
/// caller location.
pub struct Located<E>(pub E);

/// An error together with the source location where it was wrapped.
#[derive(Debug)]
pub struct LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    source: Arc<E>,
    location: Box<Location<'a>>,
}

impl<'a, E> LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    /// The location where the error was wrapped.
    #[must_use]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }
}

impl<'a, E> std::fmt::Display for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.source, self.location)
    }
}

impl<'a, E> Error for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<'a, E> Clone for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn clone(&self) -> Self {
        LocatedError {
            source: self.source.clone(),
            location: self.location.clone(),
        }
    }
}

#[allow(clippy::from_over_into)]
impl<'a, E> Into<LocatedError<'a, E>> for Located<E>
where
    E: Error + Send + Sync,
    Arc<E>: Clone,
{
    #[track_caller]
    fn into(self) -> LocatedError<'a, E> {
        let e = LocatedError {
            source: Arc::new(self.0),
            location: Box::new(*std::panic::Location::caller()),
        };
        debug!("{e}");
        e
    }
}

#[allow(clippy::from_over_into)]
impl<'a> Into<LocatedError<'a, dyn std::error::Error + Send + Sync>> for DynError {
    #[track_caller]
    fn into(self) -> LocatedError<'a, dyn std::error::Error + Send + Sync> {
        LocatedError {
            source: self,
            location: Box::new(*std::panic::Location::caller()),
        }
    }
}
