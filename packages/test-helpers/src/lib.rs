//! Testing helpers for the [Lead Gateway](https://docs.rs/lead-gateway).
pub mod configuration;
pub mod random;
