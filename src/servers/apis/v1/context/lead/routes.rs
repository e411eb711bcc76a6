//! API routes for the [`lead`](crate::servers::apis::v1::context::lead) API context.
//!
//! - `GET /leads/:lead_id`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::lead).
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::get_lead_handler;
use crate::core::Gateway;

/// It adds the routes to the router for the [`lead`](crate::servers::apis::v1::context::lead) API context.
pub fn add(prefix: &str, router: Router, gateway: Arc<Gateway>) -> Router {
    router.route(&format!("{prefix}/leads/:lead_id"), get(get_lead_handler).with_state(gateway))
}
