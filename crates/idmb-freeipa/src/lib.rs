//! # idmb-freeipa — FreeIPA JSON-RPC client
//!
//! Client for the FreeIPA (Red Hat IdM) administrative API. One client
//! instance owns one authenticated session against one server and exposes
//! every operation as a typed call that hides the JSON-RPC envelope.
//!
//! ## Capabilities
//!
//! - **Session** — form-based login, cookie replay, explicit invalidation
//! - **Users** — find, show, add, modify, delete, enable, disable
//! - **Groups** — find, show, add, delete, member add/remove
//! - **Sudo** — rules, commands, and command groups with member management
//! - **HBAC** — host-based access rules, services, member management
//! - **Hosts / Services** — find, show, add, delete
//! - **Certificates** — find, show, revoke
//! - **DNS** — zones and records
//! - **Introspection** — ping, env, whoami
//!
//! ## Architecture
//!
//! - `client` — session state, login, and the `call` RPC primitive
//! - `error` — FreeIPA-specific error type
//! - `types` — wire envelope plus per-operation option records
//! - one module per object family (`users`, `groups`, `sudo`, `hbac`,
//!   `hosts`, `services`, `certs`, `dns`, `misc`), each a thin
//!   argument-shape layer over `call`
//!
//! The client never retries: authorization failures surface to the caller,
//! which may call [`FreeIpaClient::invalidate_session`] and authenticate
//! again.

pub mod certs;
pub mod client;
pub mod dns;
pub mod error;
pub mod groups;
pub mod hbac;
pub mod hosts;
pub mod misc;
pub mod services;
pub mod sudo;
pub mod types;
pub mod users;

pub use client::FreeIpaClient;
pub use error::{IpaError, IpaResult};
