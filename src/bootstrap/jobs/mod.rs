//! Application jobs launchers.
//!
//! The main application setup has only two main stages:
//!
//! 1. Setup the domain layer: the core gateway.
//! 2. Launch all the application services as concurrent jobs.
//!
//! This modules contains all the functions needed to start those jobs.
pub mod gateway_api;

use std::panic::Location;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use lead_gateway_configuration::TslConfig;
use lead_gateway_located_error::{DynError, LocatedError};
use thiserror::Error;

/// This is the message that the "launcher" spawned task sends to the main
/// application process to notify the service was successfully started.
///
#[derive(Debug)]
pub struct Started {
    pub address: std::net::SocketAddr,
}

/// Error returned by the Bootstrap Process.
#[derive(Error, Debug)]
pub enum Error {
    /// Enabled tls but missing config.
    #[error("tls config missing")]
    MissingTlsConfig { location: &'static Location<'static> },

    /// Unable to parse tls Config.
    #[error("bad tls config: {source}")]
    BadTlsConfig {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

/// It loads the certificate and key files of the `tsl_config`, if any.
///
/// It returns `None` when the server must use plain HTTP.
pub async fn make_rust_tls(opt_tsl_config: &Option<TslConfig>) -> Option<Result<RustlsConfig, Error>> {
    match opt_tsl_config {
        Some(tsl_config) => {
            let cert = tsl_config.ssl_cert_path.clone();
            let key = tsl_config.ssl_key_path.clone();

            if !cert.exists() || !key.exists() {
                return Some(Err(Error::MissingTlsConfig {
                    location: Location::caller(),
                }));
            }

            tracing::info!("Using https: cert path: {cert}.");
            tracing::info!("Using https: key path: {key}.");

            Some(
                RustlsConfig::from_pem_file(cert, key)
                    .await
                    .map_err(|err| Error::BadTlsConfig {
                        source: (Arc::new(err) as DynError).into(),
                    }),
            )
        }
        None => None,
    }
}
