//! Lead Gateway application.
//!
//! The application has a global configuration for all its jobs. It's
//! basically a container for other services.
//!
//! The application is responsible for starting the jobs. Currently there is
//! only one job, always started:
//!
//! - Gateway REST API: the lead endpoints and the health check.
use std::sync::Arc;

use lead_gateway_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::gateway_api;
use crate::{core, servers};

/// It starts all the application jobs and returns their handles.
///
/// # Panics
///
/// Will panic if the API server cannot be started.
pub async fn start(config: &Configuration, gateway: Arc<core::Gateway>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start HTTP API
    jobs.push(gateway_api::start_job(&config.http_api, gateway, servers::apis::Version::V1).await);

    jobs
}
