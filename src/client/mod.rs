//! Token-cached client for the IOPAY API.
//!
//! All mutable state (credentials, resolved base url, one token per scope)
//! lives in [`IopayClient`]; share it behind an `Arc` to call it from several
//! tasks.

pub mod authenticate;
pub mod query;
pub mod request;
pub mod response;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::sync::RwLock;

use crate::auth::credentials::Credentials;
use crate::cache::token_cache::TokenCache;
use crate::config::settings::ClientConfig;
use crate::utils::constants::USER_AGENT;

pub use response::{ApiResponse, ResponseBody};

#[derive(Debug)]
pub struct IopayClient {
    http: Client,
    credentials: RwLock<Credentials>,
    /// Resolved lazily on the first call, see [`IopayClient::resolve_base_url`].
    base_url: RwLock<Option<String>>,
    tokens: TokenCache,
}

impl IopayClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            credentials: RwLock::new(config.credentials.clone()),
            base_url: RwLock::new(config.initial_base_url()),
            tokens: TokenCache::new(),
        })
    }

    /// Client configured from the `IOPAY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub async fn credentials(&self) -> Credentials {
        self.credentials.read().await.clone()
    }

    pub async fn io_seller_id(&self) -> Option<String> {
        self.credentials.read().await.io_seller_id.clone()
    }

    /// Base url in use, `None` until the first call resolves it.
    pub async fn base_url(&self) -> Option<String> {
        self.base_url.read().await.clone()
    }

    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
