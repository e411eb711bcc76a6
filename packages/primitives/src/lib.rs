//! Primitive types for the [Lead Gateway](https://docs.rs/lead-gateway).
//!
//! These types are shared between the gateway crate and its configuration
//! package: the persistence driver selector and the schema-less lead form
//! payload.
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod field;

/// The persistence driver used to read configurations and leads.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Hash, Clone, Copy, Display)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// A local `SQLite3` database file. Used for development and tests.
    Sqlite3,
    /// The REST interface exposed by the hosted Postgres backend.
    Postgrest,
}
