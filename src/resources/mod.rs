//! Typed wrappers over the IOPAY REST resources. Each call maps to one
//! (method, path, scope) triple; payload schemas are left to the API.

pub mod customer;
pub mod tokenize;
pub mod transactions;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::client::IopayClient;

pub use customer::Customers;
pub use tokenize::Tokenize;
pub use transactions::Transactions;

impl IopayClient {
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    pub fn tokenize(&self) -> Tokenize<'_> {
        Tokenize::new(self)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }
}

fn to_payload<T: Serialize + ?Sized>(data: &T) -> Result<Value> {
    Ok(serde_json::to_value(data)?)
}
