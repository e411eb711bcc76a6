//! Gateway application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. Currently there is only one job: the
//! REST API server.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
