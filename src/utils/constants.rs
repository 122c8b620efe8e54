//! Shared constants and invariants

pub const PRODUCTION_BASE_URL: &str = "https://api.iopay.com.br/api/";
pub const SANDBOX_BASE_URL: &str = "https://sandbox.api.iopay.com.br/api/";

/// A cached token must outlive the current instant by more than this margin.
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 10;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Auth endpoints, relative to the base url
pub const AUTH_LOGIN_PATH: &str = "auth/login";
pub const AUTH_CARD_PATH: &str = "v1/card/authentication";

// Environment variables
pub const ENV_BASE_URL: &str = "IOPAY_API_BASE_URL";
pub const ENV_AUTH_SECRET: &str = "IOPAY_AUTH_SECRET";
pub const ENV_AUTH_EMAIL: &str = "IOPAY_AUTH_EMAIL";
pub const ENV_AUTH_IO_SELLER_ID: &str = "IOPAY_AUTH_IO_SELLER_ID";
