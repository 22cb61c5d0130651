//! Session Context
//!
//! Who is signed in, shared with every component via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::Session;
use crate::session;

/// Signed-in state provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    /// True until the persisted token has been checked
    loading: RwSignal<bool>,
    api: StoredValue<ApiClient>,
}

impl SessionContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            session: RwSignal::new(None),
            loading: RwSignal::new(true),
            api: StoredValue::new(api),
        }
    }

    /// Resolve a persisted token in the background
    pub fn init(self) {
        let api = self.api();
        spawn_local(async move {
            let restored = session::restore(&api).await;
            self.session.set(restored);
            self.loading.set(false);
        });
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn user_id(&self) -> Option<u64> {
        self.session.with(|s| s.as_ref().map(|s| s.user_id))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub async fn login(self, email: String, password: String) -> Result<(), String> {
        let api = self.api();
        self.loading.set(true);
        let result = session::sign_in(&api, &email, &password).await;
        self.loading.set(false);
        match result {
            Ok(s) => {
                log::info!("[SESSION] Logged in as {}", s.email);
                self.session.set(Some(s));
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    pub async fn register(self, email: String, password: String, name: String) -> Result<(), String> {
        let api = self.api();
        self.loading.set(true);
        let result = session::sign_up(&api, &email, &password, &name).await;
        self.loading.set(false);
        match result {
            Ok(s) => {
                log::info!("[SESSION] Registered {}", s.email);
                self.session.set(Some(s));
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn logout(&self) {
        session::sign_out(&self.api());
        self.session.set(None);
    }
}

/// Install the API client and session context for the component tree below
pub fn provide_session(api: ApiClient) -> SessionContext {
    provide_context(api.clone());
    let ctx = SessionContext::new(api);
    provide_context(ctx);
    ctx.init();
    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
