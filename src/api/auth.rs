//! Auth Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Registration, TokenResponse, User};

impl ApiClient {
    /// Exchange credentials for a bearer token and persist it.
    ///
    /// The backend expects an OAuth2 password form, so the email goes in
    /// `username`. Any token already stored is not sent.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "login"]))
            .form(&[("username", email), ("password", password)]);
        let token: TokenResponse = self.send(request).await?;
        self.store_token(&token.access_token)?;
        log::info!("[API] Logged in as {}", email);
        Ok(token)
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, registration: &Registration) -> ApiResult<User> {
        let request = self
            .request(Method::POST, self.endpoint(&["auth", "register"]))
            .json(registration);
        self.send(request).await
    }

    /// Drop the stored token; there is no server-side logout
    pub fn logout(&self) {
        self.clear_token();
        log::info!("[API] Logged out");
    }

    pub async fn current_user(&self) -> ApiResult<User> {
        self.send(self.request(Method::GET, self.endpoint(&["auth", "me"]))).await
    }
}
