//! Build Configuration
//!
//! Backend location and client-side constants.

use url::Url;

/// Used when `RECIPE_SHARE_API_URL` is unset or not an http(s) base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// localStorage key holding the bearer token
pub const AUTH_TOKEN_KEY: &str = "auth_token";

pub const DEFAULT_PAGE_LIMIT: u32 = 12;
pub const MAX_PAGE_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Read the base URL baked in by the build (`RECIPE_SHARE_API_URL`)
    pub fn from_env() -> Self {
        Self::from_value(option_env!("RECIPE_SHARE_API_URL"))
    }

    pub fn from_value(value: Option<&str>) -> Self {
        let parsed = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| match parse_base_url(v) {
                Ok(url) => Some(url),
                Err(reason) => {
                    log::warn!("[CONFIG] Ignoring invalid API url {:?}: {}", v, reason);
                    None
                }
            });

        Self {
            base_url: parsed.unwrap_or_else(default_url),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_url() }
    }
}

/// Endpoints are appended as path segments, so the URL must be able to take them
fn parse_base_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme {:?}", url.scheme()));
    }
    if url.cannot_be_a_base() {
        return Err("url cannot take a path".to_string());
    }
    Ok(url)
}

fn default_url() -> Url {
    Url::parse(DEFAULT_API_URL).unwrap_or_else(|_| unreachable!("default API url is valid"))
}
