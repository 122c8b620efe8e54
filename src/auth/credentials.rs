use serde::{Deserialize, Serialize};

/// Integration credentials sent as the JSON body of both auth endpoints.
/// Unset fields are omitted from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io_seller_id: Option<String>,
}

impl Credentials {
    pub fn new(secret: impl Into<String>, email: impl Into<String>, io_seller_id: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            email: Some(email.into()),
            io_seller_id: Some(io_seller_id.into()),
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_io_seller_id(mut self, io_seller_id: impl Into<String>) -> Self {
        self.io_seller_id = Some(io_seller_id.into());
        self
    }

    /// Copy every field set in `update` over `self`; unset fields keep their value.
    pub fn merge(&mut self, update: &Credentials) {
        if let Some(secret) = &update.secret {
            self.secret = Some(secret.clone());
        }
        if let Some(email) = &update.email {
            self.email = Some(email.clone());
        }
        if let Some(io_seller_id) = &update.io_seller_id {
            self.io_seller_id = Some(io_seller_id.clone());
        }
    }

    pub(crate) fn without_empty_fields(self) -> Self {
        let keep = |value: Option<String>| value.filter(|v| !v.is_empty());
        Self {
            secret: keep(self.secret),
            email: keep(self.email),
            io_seller_id: keep(self.io_seller_id),
        }
    }
}
