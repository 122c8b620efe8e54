use anyhow::Result;
use tracing::{debug, info, warn};

use crate::auth::credentials::Credentials;
use crate::auth::scope::TokenScope;
use crate::cache::token::TokenRecord;
use crate::cache::token_cache::TokenCache;
use crate::client::{join_url, ApiResponse, IopayClient};
use crate::helpers::time::now_i64;
use crate::observability::metrics::{record_auth, record_cache_hit};
use crate::utils::constants::PRODUCTION_BASE_URL;

impl IopayClient {
    /// Exchange credentials for a token on the standard auth endpoint.
    ///
    /// Supplied credential fields are merged into the client's credentials and
    /// persist for later calls. The normalized response is returned as is;
    /// use [`IopayClient::api_token`] to get a cached token.
    pub async fn authenticate(
        &self,
        credentials: Option<&Credentials>,
        base_url_override: Option<&str>,
    ) -> Result<ApiResponse> {
        self.authenticate_scope(TokenScope::Standard, credentials, base_url_override).await
    }

    /// Same as [`IopayClient::authenticate`] against the card (tokenization) auth endpoint.
    pub async fn authenticate_sensitive(
        &self,
        credentials: Option<&Credentials>,
        base_url_override: Option<&str>,
    ) -> Result<ApiResponse> {
        self.authenticate_scope(TokenScope::Sensitive, credentials, base_url_override).await
    }

    pub async fn authenticate_scope(
        &self,
        scope: TokenScope,
        credentials: Option<&Credentials>,
        base_url_override: Option<&str>,
    ) -> Result<ApiResponse> {
        let credentials = {
            let mut current = self.credentials.write().await;
            if let Some(update) = credentials {
                current.merge(update);
            }
            current.clone()
        };
        let base_url = self.resolve_base_url(base_url_override).await;
        let url = join_url(&base_url, scope.auth_path());

        info!(%scope, %url, "authenticating");
        let response = match self.http.post(&url).json(&credentials).send().await {
            Ok(response) => response,
            Err(e) => {
                record_auth(scope.as_str(), "transport_error").await;
                return Err(e.into());
            }
        };

        let mut response = ApiResponse::from_reqwest(response).await?;
        response.body.attach_expires_at(now_i64());

        let outcome = if response.body.get("access_token").is_some() { "token" } else { "no_token" };
        record_auth(scope.as_str(), outcome).await;
        debug!(%scope, status = %response.status, outcome, "auth response");
        Ok(response)
    }

    /// Cached standard-scope token, refreshed when missing or about to expire.
    pub async fn api_token(&self) -> Result<Option<String>> {
        self.token(TokenScope::Standard).await
    }

    /// Cached sensitive-scope token, refreshed when missing or about to expire.
    pub async fn sensitive_api_token(&self) -> Result<Option<String>> {
        self.token(TokenScope::Sensitive).await
    }

    /// Returns the cached token of `scope` or authenticates again.
    ///
    /// `Ok(None)` means the auth endpoint answered without an `access_token`;
    /// `Err` is reserved for transport failures.
    pub async fn token(&self, scope: TokenScope) -> Result<Option<String>> {
        // held until the slot is refreshed
        let mut slot = self.tokens.lock(scope).await;

        if let Some(record) = slot.as_ref().filter(|record| record.is_valid()) {
            debug!(%scope, "token cache hit");
            record_cache_hit(scope.as_str()).await;
            return Ok(Some(record.access_token.clone()));
        }

        let response = self.authenticate_scope(scope, None, None).await?;
        match response.body.as_json().and_then(TokenRecord::from_auth_body) {
            Some(record) => {
                if record.expires_at.is_none() {
                    warn!(%scope, "auth response has no usable expires_in, token will not be reused");
                }
                let access_token = record.access_token.clone();
                TokenCache::store(&mut slot, scope, record);
                Ok(Some(access_token))
            }
            None => {
                warn!(%scope, status = %response.status, "authentication returned no access_token");
                Ok(None)
            }
        }
    }

    /// Base url for the next call: an explicit non-empty override replaces the
    /// stored value, otherwise the stored value is kept, otherwise production
    /// is stored.
    pub(crate) async fn resolve_base_url(&self, base_url_override: Option<&str>) -> String {
        if let Some(url) = base_url_override.filter(|url| !url.is_empty()) {
            *self.base_url.write().await = Some(url.to_owned());
            return url.to_owned();
        }

        let mut base_url = self.base_url.write().await;
        base_url
            .get_or_insert_with(|| PRODUCTION_BASE_URL.to_owned())
            .clone()
    }
}
