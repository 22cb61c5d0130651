//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use crate::api::{ApiClient, MemoryTokenStore, TokenStore};
use crate::config::ApiConfig;
use crate::models::{Comment, Recipe, User};
use crate::resources::StateCell;

pub fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "email": format!("cook{}@example.com", id),
        "name": format!("Cook {}", id),
        "avatar": null,
        "bio": null
    })
}

pub fn user(id: u64) -> User {
    serde_json::from_value(user_json(id)).unwrap()
}

pub fn recipe_json(id: u64, is_liked: bool, likes_count: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Recipe {}", id),
        "description": "A perfectly fine recipe",
        "image_url": null,
        "prep_time": 10,
        "cook_time": 20,
        "servings": 2,
        "difficulty": "easy",
        "category": "dessert",
        "author": user_json(1),
        "ingredients": [{ "quantity": "1", "unit": "cup", "name": "flour" }],
        "instructions": ["Mix", "Bake"],
        "tags": [],
        "likes_count": likes_count,
        "comments_count": 0,
        "is_liked": is_liked,
        "is_saved": false,
        "published": true,
        "created_at": "2024-05-01T10:00:00",
        "updated_at": "2024-05-01T10:00:00"
    })
}

pub fn recipe(id: u64) -> Recipe {
    serde_json::from_value(recipe_json(id, false, 0)).unwrap()
}

pub fn recipes(ids: std::ops::Range<u64>) -> Vec<Recipe> {
    ids.map(recipe).collect()
}

pub fn page_json(ids: std::ops::Range<u64>, total: u64, skip: u32, limit: u32, has_more: bool) -> Value {
    let items: Vec<Value> = ids.map(|id| recipe_json(id, false, 0)).collect();
    json!({ "items": items, "total": total, "skip": skip, "limit": limit, "has_more": has_more })
}

pub fn comment_json(id: u64) -> Value {
    json!({
        "id": id,
        "content": format!("Comment {}", id),
        "author": user_json(2),
        "created_at": "2024-05-02T08:00:00",
        "updated_at": "2024-05-02T08:00:00"
    })
}

pub fn comment(id: u64) -> Comment {
    serde_json::from_value(comment_json(id)).unwrap()
}

/// Client pointed at `server` with its own in-memory token store
pub fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(MemoryTokenStore::default());
    let store: Arc<dyn TokenStore> = tokens.clone();
    let client = ApiClient::new(&ApiConfig::from_value(Some(&server.uri())), store);
    (client, tokens)
}

/// Client whose requests can never connect
pub fn unreachable_client() -> ApiClient {
    ApiClient::new(
        &ApiConfig::from_value(Some("http://127.0.0.1:9")),
        Arc::new(MemoryTokenStore::default()),
    )
}

/// State cell that keeps a copy of the state after every update
pub struct Recording<T> {
    state: RefCell<T>,
    history: RefCell<Vec<T>>,
}

impl<T: Clone> Recording<T> {
    pub fn new(initial: T) -> Self {
        Self {
            state: RefCell::new(initial),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<T> {
        self.history.borrow().clone()
    }

    pub fn current(&self) -> T {
        self.state.borrow().clone()
    }
}

impl<T: Clone> StateCell<T> for Recording<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let result = {
            let mut state = self.state.borrow_mut();
            f(&mut state)
        };
        self.history.borrow_mut().push(self.state.borrow().clone());
        Some(result)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.state.borrow()))
    }
}
