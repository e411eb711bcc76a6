//! API context: `leads`.
//!
//! This API context is responsible for handling the read access of external
//! integrations to the leads captured by landing pages.
//!
//! # Endpoints
//!
//! - [Get a lead](#get-a-lead)
//!
//! # Get a lead
//!
//! `GET /api/v1/leads/:lead_id`
//!
//! Returns the lead and the title and slug of the landing page it was
//! submitted to. The same endpoint is available without the version prefix:
//! `GET /api/leads/:lead_id`.
//!
//! **Headers**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `x-api-key` | string | The integration API key of the active configuration | Yes | `secret123`
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `lead_id` | string | The lead id | Yes | `L1`
//!
//! **Example request**
//!
//! ```bash
//! curl -H "x-api-key: secret123" "http://127.0.0.1:1212/api/v1/leads/L1"
//! ```
//!
//! **Example response** `200`
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
//! `landing_page` is `null` when the landing page no longer exists.
//!
//! **Not authorized response** `401`
//!
//! ```json
//! {
//!   "error": "API key inválida"
//! }
//! ```
//!
//! **Not found response** `404`
//!
//! ```json
//! {
//!   "error": "Lead não encontrado"
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Lead`](crate::servers::apis::v1::context::lead::resources::Lead)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
