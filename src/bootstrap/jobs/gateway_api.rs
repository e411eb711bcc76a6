//! Gateway API job starter.
//!
//! The [`gateway_api::start_job`](crate::bootstrap::jobs::gateway_api::start_job)
//! function starts the lead gateway REST API.
//!
//! > **NOTICE**: even though there is only one job the API has different
//! > versions. API consumers can choose which version to use. The API version
//! > is part of the URL, for example: `http://localhost:1212/api/v1/leads/L1`.
//!
//! The [`gateway_api::start_job`](crate::bootstrap::jobs::gateway_api::start_job)
//! function spawns a new asynchronous task, that task is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back
//! to the main application. The main application waits until it receives
//! the [`Started`](crate::bootstrap::jobs::Started) message from the
//! "**launcher**".
//!
//! Refer to the [configuration documentation](https://docs.rs/lead-gateway-configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use lead_gateway_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::error;

use super::make_rust_tls;
use crate::core;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::{Version, API_LOG_TARGET};

/// This function starts a new API server with the provided configuration.
///
/// The functions starts a new concurrent task that will run the API server.
/// The returned handle resolves when the server stops.
///
/// # Panics
///
/// It would panic if the TLS configuration is not valid or the server cannot
/// be started.
pub async fn start_job(config: &HttpApi, gateway: Arc<core::Gateway>, version: Version) -> JoinHandle<()> {
    let bind_to = config.bind_address;

    let tls = make_rust_tls(&config.tsl_config)
        .await
        .map(|tls| tls.expect("it should have a valid gateway api tls configuration"));

    match version {
        Version::V1 => start_v1(bind_to, tls, gateway).await,
    }
}

async fn start_v1(socket: SocketAddr, tls: Option<RustlsConfig>, gateway: Arc<core::Gateway>) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket, tls))
        .start(gateway)
        .await
        .expect("it should be able to start the gateway api");

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");

        if let Err(err) = server.state.task.await {
            error!(target: API_LOG_TARGET, %err, "The API server task failed");
        }
    })
}
