use anyhow::Result;
use http::Method;
use serde::Serialize;

use crate::client::{ApiResponse, IopayClient};
use crate::resources::to_payload;

#[derive(Debug, Clone, Copy)]
pub struct Tokenize<'a> {
    client: &'a IopayClient,
}

impl<'a> Tokenize<'a> {
    pub(crate) fn new(client: &'a IopayClient) -> Self {
        Self { client }
    }

    /// `POST v1/card/tokenize/token` with the sensitive token. The returned
    /// token id can be associated with a customer or used in a transaction.
    pub async fn card<T: Serialize + ?Sized>(&self, card: &T) -> Result<ApiResponse> {
        let body = to_payload(card)?;
        self.client
            .request_sensitive(Method::POST, "v1/card/tokenize/token", None, Some(&body))
            .await
    }
}
