//! Session Lifecycle
//!
//! Turning credentials or a persisted token into a resolved `Session`. A token
//! that cannot be resolved to a profile is discarded, so holding a `Session`
//! always means a profile was fetched.

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::Session;
use crate::validation::{validate_login, validate_registration};

/// Resolve the persisted token, if any, to a session
pub async fn restore(api: &ApiClient) -> Option<Session> {
    let token = api.token()?;
    match api.current_user().await {
        Ok(user) => {
            log::info!("[SESSION] Restored session for user {}", user.id);
            Some(Session::new(user, token))
        }
        Err(e) => {
            log::warn!("[SESSION] Discarding persisted token: {}", e);
            api.clear_token();
            None
        }
    }
}

/// Log in and resolve the profile
pub async fn sign_in(api: &ApiClient, email: &str, password: &str) -> ApiResult<Session> {
    validate_login(email, password)?;
    let token = api.login(email.trim(), password).await?;
    match api.current_user().await {
        Ok(user) => Ok(Session::new(user, token.access_token)),
        Err(e) => {
            log::warn!("[SESSION] Logged in but profile lookup failed: {}", e);
            api.clear_token();
            Err(e)
        }
    }
}

/// Create an account, then log straight in
pub async fn sign_up(api: &ApiClient, email: &str, password: &str, name: &str) -> ApiResult<Session> {
    let registration = validate_registration(email, password, name)?;
    api.register(&registration).await?;
    sign_in(api, &registration.email, &registration.password).await
}

pub fn sign_out(api: &ApiClient) {
    api.logout();
}
