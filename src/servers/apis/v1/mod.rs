//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Leads` | Leads captured by landing pages | [`v1`](crate::servers::apis::v1::context::lead)
//! `Health check` | Service status | [`v1`](crate::servers::apis::v1::context::health_check)
//!
//! Refer to the [`auth`](crate::core::auth) module for more information
//! about the authentication process.
pub mod context;
pub mod responses;
pub mod routes;
