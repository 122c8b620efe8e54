use serde_json::Value;

use crate::helpers::time::now_i64;
use crate::utils::constants::TOKEN_SAFETY_MARGIN_SECS;

/// Bearer token as returned by one of the auth endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub access_token: String,
    /// UNIX timestamp; `None` when the auth response carried no usable `expires_in`.
    pub expires_at: Option<i64>,
    /// Full auth response body.
    pub raw: Value,
}

impl TokenRecord {
    /// Build a record from a normalized auth response body. Returns `None`
    /// when the body holds no `access_token`.
    pub fn from_auth_body(body: &Value) -> Option<Self> {
        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())?
            .to_owned();
        let expires_at = body.get("expires_at").and_then(Value::as_i64);

        Some(Self { access_token, expires_at, raw: body.clone() })
    }

    /// A record without expiry is never valid.
    pub fn is_valid_at(&self, now: i64) -> bool {
        !self.access_token.is_empty()
            && self
                .expires_at
                .is_some_and(|expires_at| expires_at - TOKEN_SAFETY_MARGIN_SECS > now)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(now_i64())
    }
}
