use anyhow::Result;
use http::Method;
use serde::Serialize;
use serde_json::json;

use crate::client::{ApiResponse, IopayClient};
use crate::resources::to_payload;

/// Transaction lifecycle. Amounts are in cents.
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    client: &'a IopayClient,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a IopayClient) -> Self {
        Self { client }
    }

    /// New credit, PIX or boleto transaction for `customer_id`.
    pub async fn create<T: Serialize + ?Sized>(&self, customer_id: &str, transaction: &T) -> Result<ApiResponse> {
        let body = to_payload(transaction)?;
        self.client
            .request_standard(Method::POST, &format!("v1/transaction/new/{customer_id}"), None, Some(&body))
            .await
    }

    /// Full or partial reversal.
    pub async fn cancel(&self, transaction_id: &str, amount: i64) -> Result<ApiResponse> {
        let body = json!({"amount": amount});
        self.client
            .request_standard(Method::POST, &format!("v1/transaction/void/{transaction_id}"), None, Some(&body))
            .await
    }

    /// Full or partial capture of a pre-authorized transaction.
    pub async fn capture(&self, transaction_id: &str, amount: i64) -> Result<ApiResponse> {
        let body = json!({"amount": amount});
        self.client
            .request_standard(Method::POST, &format!("v1/transaction/capture/{transaction_id}"), None, Some(&body))
            .await
    }

    pub async fn get(&self, transaction_id: &str) -> Result<ApiResponse> {
        self.client
            .request_standard(Method::GET, &format!("v1/transaction/get/{transaction_id}"), None, None)
            .await
    }

    /// `GET v1/transaction/list`; `query` holds the filter and pagination params.
    /// Nested objects are sent in bracket form (`filter[status]=paid`).
    pub async fn get_all<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<ApiResponse> {
        let query = to_payload(query)?;
        self.client
            .request_standard(Method::GET, "v1/transaction/list", Some(&query), None)
            .await
    }
}
