use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::auth::scope::TokenScope;
use crate::cache::token::TokenRecord;

/// One token slot per scope. Each slot has its own lock so refreshing one
/// scope never blocks or touches the other.
#[derive(Debug, Default)]
pub struct TokenCache {
    standard: Mutex<Option<TokenRecord>>,
    sensitive: Mutex<Option<TokenRecord>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the slot of `scope`. Holding the guard across a refresh makes the
    /// check-then-refresh sequence atomic per scope.
    pub async fn lock(&self, scope: TokenScope) -> MutexGuard<'_, Option<TokenRecord>> {
        match scope {
            TokenScope::Standard => self.standard.lock().await,
            TokenScope::Sensitive => self.sensitive.lock().await,
        }
    }

    /// Replace the record held by a locked slot wholesale.
    pub fn store(slot: &mut Option<TokenRecord>, scope: TokenScope, record: TokenRecord) {
        debug!(%scope, expires_at = ?record.expires_at, "storing token");
        *slot = Some(record);
    }

    /// Get the record if it exists and is still valid
    #[cfg(test)]
    pub async fn get(&self, scope: TokenScope) -> Option<TokenRecord> {
        self.lock(scope)
            .await
            .as_ref()
            .filter(|record| record.is_valid())
            .cloned()
    }

    #[cfg(test)]
    pub async fn set(&self, scope: TokenScope, record: TokenRecord) {
        Self::store(&mut *self.lock(scope).await, scope, record);
    }

    #[cfg(test)]
    pub async fn clear(&self, scope: TokenScope) {
        self.lock(scope).await.take();
    }
}
