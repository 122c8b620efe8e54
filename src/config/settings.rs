use std::str::FromStr;

use anyhow::{anyhow, Error};
use clap::ValueEnum;
use serde::Deserialize;

use crate::auth::credentials::Credentials;
use crate::utils::constants::{DEFAULT_HTTP_TIMEOUT_SECS, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

/// ================================
/// Client configuration
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClientConfig {
    /// Explicit base url, wins over `environment`.
    pub base_url: Option<String>,
    pub environment: Option<ApiEnvironment>,
    #[serde(default)]
    pub credentials: Credentials,
    pub timeout_seconds: Option<u64>,
    pub logging: Option<LoggingConfig>,
}

impl ClientConfig {
    /// Base url known before any call is made, if any.
    pub fn initial_base_url(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .filter(|url| !url.is_empty())
            .cloned()
            .or(self.environment.map(|env| env.base_url().to_owned()))
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }
}

/// Known deployments of the API.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    Production,
    Sandbox,
}

impl ApiEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Production => PRODUCTION_BASE_URL,
            ApiEnvironment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

impl FromStr for ApiEnvironment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(ApiEnvironment::Production),
            "sandbox" => Ok(ApiEnvironment::Sandbox),
            other => Err(anyhow!("unknown api environment '{}'", other)),
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::Compact }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}
