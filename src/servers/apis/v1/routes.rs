//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::lead;
use crate::core::Gateway;

/// Add the routes for the v1 API.
///
/// > **NOTICE**: the lead endpoint is also served without the `v1` prefix.
/// > For example, `GET /api/leads/L1` is the same as `GET /api/v1/leads/L1`.
pub fn add(prefix: &str, router: Router, gateway: Arc<Gateway>) -> Router {
    // Without `v1` prefix.
    let router = lead::routes::add(prefix, router, gateway.clone());

    // With `v1` prefix
    let v1_prefix = format!("{prefix}/v1");
    lead::routes::add(&v1_prefix, router, gateway)
}
