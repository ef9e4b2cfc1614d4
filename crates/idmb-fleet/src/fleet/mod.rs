//! Fleet execution engine and SSSD command templates.
//!
//! - `types` — command outcome and batch result types
//! - `error` — fleet error type
//! - `validate` — allow-list checks for values spliced into command text
//! - `service` — SSH connection handling and multi-host fan-out
//! - `sssd` — fixed SSSD cache-management commands over the engine

pub mod error;
pub mod service;
pub mod sssd;
pub mod types;
pub mod validate;
