//! # IOPAY API client
//!
//! Async client for the IOPAY payment API. Bearer tokens for the two
//! credential scopes (standard resources, card/tokenization resources) are
//! fetched on demand, cached and refreshed shortly before they expire.
//!
//! Modules:
//! - `config` — client configuration from the environment or a YAML file
//! - `auth` — credentials and token scopes
//! - `cache` — per-scope token records
//! - `client` — authentication, token accessors and authenticated requests
//! - `resources` — customer, tokenization and transaction wrappers
//! - `observability` — prometheus metrics

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod helpers;
pub mod observability;
pub mod resources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::auth::{Credentials, TokenScope};
pub use crate::client::{ApiResponse, IopayClient, ResponseBody};
pub use crate::config::settings::{ApiEnvironment, ClientConfig};
