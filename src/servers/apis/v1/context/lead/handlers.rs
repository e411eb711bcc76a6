//! API handlers for the [`lead`](crate::servers::apis::v1::context::lead) API context.
use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use tracing::debug;

use super::resources::Lead;
use super::responses::lead_response;
use crate::core::Gateway;
use crate::servers::apis::v1::responses::{error_response, not_found_response, LEAD_NOT_FOUND_MESSAGE};
use crate::servers::apis::{LeadIdParam, API_KEY_HEADER, API_LOG_TARGET};

/// It handles the request to get a lead.
///
/// It returns:
///
/// - `200` with a json [`Lead`](crate::servers::apis::v1::context::lead::resources::Lead)
///   resource, if the API key is valid and the lead exists.
/// - `401` if the API key is missing or invalid.
/// - `404` if the lead does not exist.
/// - `500` if the lead could not be read.
///
/// The API key is checked before the lead id. A lead id that cannot be
/// decoded from the path is answered as an unknown lead.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::lead#get-a-lead)
/// for more information about this endpoint.
pub async fn get_lead_handler(
    State(gateway): State<Arc<Gateway>>,
    lead_id: Result<Path<LeadIdParam>, PathRejection>,
    headers: HeaderMap,
) -> Response {
    // A value that is not valid UTF-8 can never match, but it was provided.
    let provided_key = headers
        .get(API_KEY_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let Ok(Path(LeadIdParam(lead_id))) = lead_id else {
        return match gateway.authenticate(provided_key.as_deref()).await {
            Ok(()) => {
                debug!(target: API_LOG_TARGET, "undecodable lead id in path");
                not_found_response(LEAD_NOT_FOUND_MESSAGE)
            }
            Err(err) => error_response(&err),
        };
    };

    match gateway.get_lead(&lead_id, provided_key.as_deref()).await {
        Ok(lead) => lead_response(&Lead::from(lead)),
        Err(err) => error_response(&err),
    }
}
