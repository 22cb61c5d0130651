use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_api;
use crate::models::Comment;
use crate::resources::{comments, Loadable};

/// Comment thread of one recipe
#[derive(Clone, Copy)]
pub struct CommentThread {
    state: RwSignal<Loadable<Vec<Comment>>>,
    recipe_id: Signal<u64>,
    api: StoredValue<ApiClient>,
}

impl CommentThread {
    pub fn comments(&self) -> Vec<Comment> {
        self.state.with(|s| s.value().cloned().unwrap_or_default())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(Loadable::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            comments::reload(&this.state, &api, this.recipe_id.get_untracked(), false).await;
        });
    }

    pub async fn add_comment(self, content: String) -> Result<(), String> {
        let api = self.api.get_value();
        comments::add(&self.state, &api, self.recipe_id.get_untracked(), &content)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn delete_comment(self, comment_id: u64) -> Result<(), String> {
        let api = self.api.get_value();
        comments::delete(&self.state, &api, self.recipe_id.get_untracked(), comment_id)
            .await
            .map_err(|e| e.to_string())
    }
}

pub fn use_comments(recipe_id: impl Into<Signal<u64>>) -> CommentThread {
    let handle = CommentThread {
        state: RwSignal::new(Loadable::default()),
        recipe_id: recipe_id.into(),
        api: StoredValue::new(use_api()),
    };

    Effect::new(move |previous: Option<u64>| {
        let id = handle.recipe_id.get();
        let restart = previous != Some(id);
        spawn_local(async move {
            let api = handle.api.get_value();
            comments::reload(&handle.state, &api, id, restart).await;
        });
        id
    });

    handle
}
