//! **Lead Gateway** is an API-key-gated service that lets external
//! integrations read the leads captured by landing pages.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//! - [Components](#components)
//!
//! # Features
//!
//! - One endpoint to read a lead with the title and slug of its landing page.
//! - Authentication with the integration API key of the active configuration.
//! - Persistence drivers: `SQLite3` for development and the `PostgREST`
//!   interface of the hosted Postgres backend for production.
//! - Optional HTTPS.
//!
//! # Services
//!
//! The gateway runs only one service: the [REST API](crate::servers::apis).
//!
//! # Installation
//!
//! ```text
//! cargo build --release
//! mkdir -p ./storage/lead-gateway/lib/database
//! ./target/release/lead-gateway
//! ```
//!
//! # Configuration
//!
//! The gateway loads the configuration from the file in the
//! `LEAD_GATEWAY_CONFIG_TOML_PATH` environment variable, or from the
//! default development file
//! `./share/default/config/gateway.development.sqlite3.toml`. The whole
//! configuration can also be injected in the `LEAD_GATEWAY_CONFIG_TOML`
//! environment variable.
//!
//! Secrets should be injected with override variables, for example:
//!
//! ```text
//! LEAD_GATEWAY_CONFIG_OVERRIDE_CORE__DATABASE__SERVICE_KEY="MyServiceKey" ./target/release/lead-gateway
//! ```
//!
//! Refer to the [`lead-gateway-configuration`](https://docs.rs/lead-gateway-configuration)
//! package for all the options.
//!
//! # Usage
//!
//! ```text
//! curl -H "x-api-key: secret123" "http://127.0.0.1:1212/api/v1/leads/L1"
//! ```
//!
//! # Components
//!
//! ```text
//! Delivery layer   Domain layer       Persistence
//!
//!   REST API    |>   Gateway     |>  Sqlite | Postgrest
//! ```
//!
//! - [`core`]: the domain layer. Authentication and lead lookups.
//! - [`servers`]: the delivery layer. The REST API server.
//! - [`bootstrap`]: configuration, logging and job launching.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
