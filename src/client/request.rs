use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Method;
use serde_json::{Map, Value};
use tracing::debug;

use crate::auth::scope::TokenScope;
use crate::client::query::flatten_query;
use crate::client::{join_url, ApiResponse, IopayClient};
use crate::helpers::time::get_instant;
use crate::observability::metrics::record_api_request;

impl IopayClient {
    /// Request a standard resource with the standard bearer token.
    pub async fn request_standard(
        &self,
        method: Method,
        path: &str,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        self.request(TokenScope::Standard, method, path, query, body).await
    }

    /// Request a card or tokenization resource with the sensitive bearer token.
    pub async fn request_sensitive(
        &self,
        method: Method,
        path: &str,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        self.request(TokenScope::Sensitive, method, path, query, body).await
    }

    /// Authenticated call to `path` (relative to the base url).
    ///
    /// When no token can be obtained the request still goes out with
    /// `Authorization: Bearer null` and the server's answer is returned.
    /// There is no retry on 401.
    pub async fn request(
        &self,
        scope: TokenScope,
        method: Method,
        path: &str,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let token = self.token(scope).await?;
        let bearer = format!("Bearer {}", token.as_deref().unwrap_or("null"));

        let base_url = self.resolve_base_url(None).await;
        let url = join_url(&base_url, path);

        let empty = Value::Object(Map::new());
        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(AUTHORIZATION, bearer)
            .json(body.unwrap_or(&empty));
        if let Some(query) = query {
            request = request.query(&flatten_query(query));
        }

        debug!(%scope, %method, %url, "sending request");
        let start = get_instant();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                record_api_request(scope.as_str(), method.as_str(), "error", start.elapsed().as_secs_f64()).await;
                return Err(e.into());
            }
        };
        let elapsed = start.elapsed().as_secs_f64();

        let response = ApiResponse::from_reqwest(response).await?;
        record_api_request(scope.as_str(), method.as_str(), response.status.as_str(), elapsed).await;
        debug!(%scope, %method, %url, status = %response.status, "response received");
        Ok(response)
    }
}
