//! Common responses for the API v1 shared by all the contexts.
//!
//! Error bodies are JSON objects with a single `error` message. The messages
//! are the ones the landing page product shows to integrators.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core::error::{Error, ErrorKind};

pub const MISSING_API_KEY_MESSAGE: &str = "API key não fornecida";
pub const INVALID_API_KEY_MESSAGE: &str = "API key inválida";
pub const LEAD_NOT_FOUND_MESSAGE: &str = "Lead não encontrado";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// The body of every error response.
#[derive(Serialize, Debug)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

// Error responses

/// It maps a core error to its response. Internal errors never expose their
/// cause.
#[must_use]
pub fn error_response(err: &Error) -> Response {
    match (err, err.kind()) {
        (Error::MissingCredential { .. }, _) => unauthorized_response(MISSING_API_KEY_MESSAGE),
        (_, ErrorKind::Unauthorized) => unauthorized_response(INVALID_API_KEY_MESSAGE),
        (_, ErrorKind::NotFound) => not_found_response(LEAD_NOT_FOUND_MESSAGE),
        (_, ErrorKind::Internal) => internal_error_response(),
    }
}

#[must_use]
pub fn unauthorized_response(message: &str) -> Response {
    json_error_response(StatusCode::UNAUTHORIZED, message)
}

#[must_use]
pub fn not_found_response(message: &str) -> Response {
    json_error_response(StatusCode::NOT_FOUND, message)
}

#[must_use]
pub fn internal_error_response() -> Response {
    json_error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

fn json_error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}
