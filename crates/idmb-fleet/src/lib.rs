//! # idmb-fleet — multi-host SSH command execution
//!
//! Runs a single shell command on one or many IdM-enrolled hosts over SSH,
//! capturing output and exit status per host. The batch entry point
//! isolates per-host failures: one unreachable host never aborts the rest,
//! and the batch call always resolves with one entry per requested host.
//!
//! On top of the execution engine sit the SSSD cache-management command
//! templates (cache clear, per-identity invalidation, timeout tuning,
//! status, connectivity check).

pub mod fleet;

pub use fleet::error::{FleetError, FleetResult};
pub use fleet::service::CommandFleet;
pub use fleet::types::{CommandOutcome, HostResults, CHANNEL_FAILURE_EXIT_CODE};
