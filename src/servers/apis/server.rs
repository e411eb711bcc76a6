//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! `ApiServer` relies on a launcher to start the actual server.
//!
//! 1. `ApiServer::start` -> spawns new asynchronous task.
//! 2. `Launcher::start` -> starts the server on the spawned task.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Knowing how to start the server with graceful shutdown.
//!
//! The main application starts the server once and only stops it on the
//! global shutdown signal. The tests start and stop it once per test.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use derive_more::Constructor;
use futures::future::BoxFuture;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::{debug, error, info};

use super::routes::router;
use super::API_LOG_TARGET;
use crate::bootstrap::jobs::Started;
use crate::core::Gateway;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The API server on {bind_to} did not report its bound address")]
    NotStarted { bind_to: SocketAddr },

    #[error("Unable to send the halt signal to the API server")]
    UnableToSendHaltSignal,

    #[error("The API server task failed: {reason}")]
    TaskFailed { reason: String },
}

/// A stopped API server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// An API server controller.
///
/// It's a state machine. The launcher keeps the bind address and the TLS
/// configuration, so the server can be stopped and started again with the
/// same settings.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns a `ApiServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if no `SocketAddr` is returned after launching the server.
    pub async fn start(self, gateway: Arc<Gateway>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;
        let bind_to = launcher.bind_to;

        let task = tokio::spawn(async move {
            debug!(target: API_LOG_TARGET, "Starting with launcher in spawned task ...");

            match launcher.start(gateway, tx_start, rx_halt) {
                Ok(server) => server.await,
                Err(err) => error!(target: API_LOG_TARGET, %err, "Unable to start the server"),
            }

            debug!(target: API_LOG_TARGET, "Server on socket address: {bind_to} stopped");

            launcher
        });

        let Ok(started) = rx_start.await else {
            return Err(Error::NotStarted { bind_to });
        };

        Ok(ApiServer {
            state: Running {
                binding: started.address,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns a `ApiServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was closed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltSignal)?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|err| Error::TaskFailed { reason: err.to_string() })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A struct responsible for starting the API server.
#[derive(Constructor, Debug)]
pub struct Launcher {
    bind_to: SocketAddr,
    tls: Option<RustlsConfig>,
}

impl Launcher {
    /// Starts the API server with graceful shutdown.
    ///
    /// It sends the [`Started`] message with the bound address once the
    /// socket is bound and returns the future serving the requests.
    ///
    /// # Errors
    ///
    /// Will return an `io::Error` if the socket cannot be bound.
    pub fn start(
        &self,
        gateway: Arc<Gateway>,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) -> Result<BoxFuture<'static, ()>, std::io::Error> {
        let router = router(gateway);

        let socket = std::net::TcpListener::bind(self.bind_to)?;
        socket.set_nonblocking(true)?;
        let address = socket.local_addr()?;

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let tls = self.tls.clone();
        let protocol = if tls.is_some() { "https" } else { "http" };

        let running = Box::pin(async move {
            let served = match tls {
                Some(tls) => {
                    axum_server::from_tcp_rustls(socket, tls)
                        .handle(handle)
                        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
                        .await
                }
                None => {
                    axum_server::from_tcp(socket)
                        .handle(handle)
                        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
                        .await
                }
            };

            if let Err(err) = served {
                error!(target: API_LOG_TARGET, %err, "Axum server crashed");
            }
        });

        info!(target: API_LOG_TARGET, "Started on {protocol}://{address}");

        if tx_start.send(Started { address }).is_err() {
            debug!(target: API_LOG_TARGET, "Nobody is waiting for the started message");
        }

        Ok(running)
    }
}
