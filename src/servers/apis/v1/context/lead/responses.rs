//! API responses for the [`lead`](crate::servers::apis::v1::context::lead) API context.
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::Lead;

/// `200` response that contains the [`Lead`] resource as json.
#[must_use]
pub fn lead_response(lead: &Lead) -> Response {
    Json(lead).into_response()
}
