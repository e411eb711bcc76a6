//! The Lead Gateway REST API with all its versions.
//!
//! Endpoints for the latest API: [v1].
//!
//! The lead endpoints require the integration API key of the active
//! configuration in the `x-api-key` header. Refer to
//! [Authentication](#authentication) for more information.
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Authentication](#authentication)
//! - [Versioning](#versioning)
//! - [Endpoints](#endpoints)
//!
//! # Configuration
//!
//! The configuration file has a [`[http_api]`](lead_gateway_configuration::HttpApi)
//! section to set the address the API binds to.
//!
//! ```toml
//! [http_api]
//! bind_address = "0.0.0.0:1212"
//! ```
//!
//! When you run the gateway you will see the following message:
//!
//! ```text
//! 2024-06-10T14:22:08.664346Z  INFO API: Started on http://0.0.0.0:1212
//! ```
//!
//! You can test the API with `curl`:
//!
//! ```bash
//! $ curl -s -H "x-api-key: secret123" "http://0.0.0.0:1212/api/v1/leads/L1"
//! ```
//!
//! The response will be a JSON object. For example, the
//! [lead endpoint](crate::servers::apis::v1::context::lead#get-a-lead):
//!
//! ```json
//! {
//!   "id": "L1",
//!   "created_at": "2024-01-01T00:00:00Z",
//!   "landing_page_id": "P1",
//!   "landing_page": {
//!     "title": "Launch",
//!     "slug": "launch"
//!   },
//!   "data": {
//!     "name": "Ana",
//!     "phone": "+5511999999999"
//!   }
//! }
//! ```
//!
//! # Authentication
//!
//! There is only one valid key: the `integration_api_key` of the
//! configuration flagged as active in the database. It is read on every
//! request, so a key rotated in the backend is used right away.
//!
//! Failed requests get a JSON body with an `error` message:
//!
//! Status | Body
//! ---|---
//! 401 | `{"error": "API key não fornecida"}`
//! 401 | `{"error": "API key inválida"}`
//! 404 | `{"error": "Lead não encontrado"}`
//! 500 | `{"error": "Erro interno do servidor"}`
//!
//! Refer to [`auth`](crate::core::auth) for more information about the key
//! verification.
//!
//! # Setup SSL (optional)
//!
//! The API server supports SSL. Add the `tsl_config` section with the paths
//! to the certificate and key files:
//!
//! ```toml
//! [http_api.tsl_config]
//! ssl_cert_path = "./storage/lead-gateway/lib/tls/localhost.crt"
//! ssl_key_path = "./storage/lead-gateway/lib/tls/localhost.key"
//! ```
//!
//! # Versioning
//!
//! The API is versioned and each version has its own module. Currently there
//! is only one API version: [v1]. Its endpoints are also served without the
//! version prefix.
//!
//! # Endpoints
//!
//! Refer to the [v1] module for the list of available API endpoints.
pub mod routes;
pub mod server;
pub mod v1;

use serde::{Deserialize, Serialize};

/// The `tracing` target for the API logs.
pub const API_LOG_TARGET: &str = "API";

/// The header carrying the integration API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The lead id URL path parameter.
///
/// For example: `http://localhost:1212/api/v1/leads/{lead_id}`.
///
/// Lead ids are opaque, so the value is not validated.
#[derive(Deserialize)]
pub struct LeadIdParam(pub String);

/// The version of the HTTP Api.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the HTTP Api.
    V1,
}
