use anyhow::Result;
use http::Method;
use serde::Serialize;
use serde_json::json;

use crate::client::{ApiResponse, IopayClient};
use crate::resources::to_payload;

/// Customers and their stored cards. Card operations use the sensitive token.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a IopayClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a IopayClient) -> Self {
        Self { client }
    }

    /// `POST v1/customer/new`
    pub async fn create<T: Serialize + ?Sized>(&self, customer: &T) -> Result<ApiResponse> {
        let body = to_payload(customer)?;
        self.client
            .request_standard(Method::POST, "v1/customer/new", None, Some(&body))
            .await
    }

    /// `GET v1/customer/get/{customer_id}`
    pub async fn get(&self, customer_id: &str) -> Result<ApiResponse> {
        self.client
            .request_standard(Method::GET, &format!("v1/customer/get/{customer_id}"), None, None)
            .await
    }

    /// Attach a tokenized card to the customer.
    pub async fn associate_card_token(&self, customer_id: &str, token_id: &str) -> Result<ApiResponse> {
        let body = json!({"id_customer": customer_id, "token": token_id});
        self.client
            .request_sensitive(Method::POST, "v1/card/associate_token_with_customer", None, Some(&body))
            .await
    }

    pub async fn list_cards(&self, customer_id: &str) -> Result<ApiResponse> {
        self.client
            .request_sensitive(Method::GET, &format!("v1/card/list/{customer_id}"), None, None)
            .await
    }

    /// Card charged by credit transactions that name neither a token nor a card.
    pub async fn set_default_card(&self, customer_id: &str, card_id: &str) -> Result<ApiResponse> {
        let body = json!({"id_card": card_id});
        self.client
            .request_sensitive(Method::POST, &format!("v1/card/set_default/{customer_id}"), None, Some(&body))
            .await
    }

    pub async fn delete_card(&self, customer_id: &str, card_id: &str) -> Result<ApiResponse> {
        self.client
            .request_sensitive(Method::DELETE, &format!("v1/card/delete/{customer_id}/{card_id}"), None, None)
            .await
    }

    pub async fn delete_all_cards(&self, customer_id: &str) -> Result<ApiResponse> {
        self.client
            .request_sensitive(Method::DELETE, &format!("v1/card/delete_all/{customer_id}"), None, None)
            .await
    }
}
