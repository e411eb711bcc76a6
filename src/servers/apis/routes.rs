//! API routes.
//!
//! It loads all the API routes for all API versions and adds the common
//! layers to them.
//!
//! All the API routes have the `/api` prefix. Versioned routes have the
//! version as the next path segment. For example: `/api/v1/leads/L1`.
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method, Request};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};
use uuid::Uuid;

use super::v1::context::health_check::handlers::health_check_handler;
use super::{v1, API_KEY_HEADER, API_LOG_TARGET};
use crate::core::Gateway;

/// Add all API routes to the router.
#[allow(clippy::needless_pass_by_value)]
pub fn router(gateway: Arc<Gateway>) -> Router {
    let router = Router::new();

    let api_url_prefix = "/api";

    let router = v1::routes::add(api_url_prefix, router, gateway);

    router
        .route(&format!("{api_url_prefix}/health_check"), get(health_check_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([
                    HeaderName::from_static(API_KEY_HEADER),
                    header::AUTHORIZATION,
                    header::CONTENT_TYPE,
                ]),
        )
        .layer(CompressionLayer::new())
        .layer(PropagateHeaderLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(|request: &Request<axum::body::Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();

                    tracing::info!(target: API_LOG_TARGET, method = %method, uri = %uri, request_id = %request_id, "request");
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = response
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();
                    let latency_ms = latency.as_millis();

                    tracing::info!(target: API_LOG_TARGET, latency = %latency_ms, status = %status_code, request_id = %request_id, "response");
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
}

#[derive(Clone, Default)]
struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string()).ok().map(RequestId::new)
    }
}
