//! REST Client
//!
//! Typed bindings to the backend API, organized by domain. Every call returns
//! an `ApiResult`; transport failures and non-2xx responses never escape as
//! panics. Calls are fire-once: no retries and no client-side timeout.

mod auth;
mod comments;
mod recipes;
mod social;
mod token_store;
mod upload;


use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

pub use token_store::{default_store, MemoryTokenStore, TokenStore};
#[cfg(target_arch = "wasm32")]
pub use token_store::LocalStorageTokenStore;

/// Handle to the backend; cheap to clone, shares the token store
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Persisted token, if any. Storage failures read as "no token".
    pub fn token(&self) -> Option<String> {
        match self.tokens.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("[API] Could not read token: {}", e);
                None
            }
        }
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn store_token(&self, token: &str) -> ApiResult<()> {
        self.tokens.save(token)
    }

    /// Forget the persisted token
    pub fn clear_token(&self) {
        if let Err(e) = self.tokens.clear() {
            log::warn!("[API] Could not clear token: {}", e);
        }
    }

    /// Base URL with `segments` appended as path components
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        match url.path_segments_mut() {
            Ok(mut path) => {
                path.pop_if_empty().extend(segments);
            }
            Err(()) => log::error!("[API] Base url {} cannot take a path", self.base_url),
        }
        url
    }

    fn endpoint_with_query(&self, segments: &[&str], pairs: &[(&str, String)]) -> Url {
        let mut url = self.endpoint(segments);
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    /// Request builder with the bearer token attached when one is stored
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and require a 2xx status
    async fn dispatch(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let request = builder.build().map_err(|e| {
            log::warn!("[API] Could not build request: {}", e);
            ApiError::Network
        })?;
        let label = format!("{} {}", request.method(), request.url().path());
        log::debug!("[API] {}", label);

        let response = self.http.execute(request).await.map_err(|e| {
            log::warn!("[API] {} failed: {}", label, e);
            ApiError::Network
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), detail_message(&body));
        log::warn!("[API] {} -> {}: {}", label, status.as_u16(), err);
        Err(err)
    }

    /// Send and decode a JSON body
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.dispatch(builder).await?;
        let body = response.text().await.map_err(|e| {
            log::warn!("[API] Could not read response body: {}", e);
            ApiError::Network
        })?;
        serde_json::from_str(&body).map_err(|e| {
            log::warn!("[API] Unexpected response body: {}", e);
            ApiError::Decode
        })
    }

    /// Send and ignore whatever body comes back
    async fn send_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.dispatch(builder).await.map(|_| ())
    }
}

/// Server-provided error text: `detail` as a string, or the first `msg`
/// of a validation error list
fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = match value.get("detail").or_else(|| value.get("message"))? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.first()?.get("msg")?.as_str()?.to_string(),
        _ => return None,
    };
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_string()) }
}
