//! Token Persistence
//!
//! Where the bearer token lives between page loads.

use std::sync::{Arc, Mutex};

use crate::error::{ApiError, ApiResult};

pub trait TokenStore: Send + Sync {
    fn load(&self) -> ApiResult<Option<String>>;
    fn save(&self, token: &str) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// Process-local store for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ApiResult<Option<String>> {
        let guard = self.token.lock().map_err(|e| ApiError::Storage(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        let mut guard = self.token.lock().map_err(|e| ApiError::Storage(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        let mut guard = self.token.lock().map_err(|e| ApiError::Storage(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// `window.localStorage` under a single key
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> ApiResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| ApiError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ApiError::Storage("localStorage unavailable".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> ApiResult<Option<String>> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        self.storage()?
            .set_item(self.key, token)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> ApiResult<()> {
        self.storage()?
            .remove_item(self.key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

/// Store used by the running app: localStorage in the browser, memory elsewhere
pub fn default_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageTokenStore::new(crate::config::AUTH_TOKEN_KEY))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryTokenStore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load().unwrap(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

        store.save("def").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("def"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
