//! # idmb-core — shared plumbing for the idmbridge crates
//!
//! Configuration loading (YAML settings + environment-only credentials) and
//! logging initialisation used by `idmb-freeipa` and `idmb-fleet`.
//!
//! Credentials are deliberately **not** part of the settings file format:
//! passwords are read from process environment variables only and held as
//! [`secrecy::SecretString`] so they never show up in `Debug` output or logs.

pub mod config;
pub mod logging;

pub use config::{ConfigError, FleetSettings, FreeIpaSettings, Settings};
