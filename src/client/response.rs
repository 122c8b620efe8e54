use anyhow::Result;
use http::{HeaderMap, StatusCode};
use serde_json::Value;
use tracing::debug;

/// Response body: parsed JSON when the server sent valid JSON, the raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(e) => {
                debug!("body is not valid JSON, keeping text: {}", e);
                ResponseBody::Text(raw)
            }
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }

    /// Field of a JSON object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    pub fn into_value(self) -> Value {
        match self {
            ResponseBody::Json(value) => value,
            ResponseBody::Text(text) => Value::String(text),
        }
    }

    /// Add `expires_at = now + expires_in` to an auth body when `expires_in`
    /// is a positive number.
    pub(crate) fn attach_expires_at(&mut self, now: i64) {
        let ResponseBody::Json(Value::Object(fields)) = self else {
            return;
        };
        let expires_in = fields
            .get("expires_in")
            .and_then(Value::as_f64)
            .filter(|expires_in| *expires_in > 0.0);
        if let Some(expires_in) = expires_in {
            fields.insert("expires_at".to_owned(), Value::from(now + expires_in as i64));
        }
    }
}

/// What every call returns, whatever the status code.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = ResponseBody::parse(response.text().await?);
        Ok(Self { status, headers, body })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
