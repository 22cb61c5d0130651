use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_api;
use crate::models::Recipe;
use crate::resources::optimistic::{toggle_recipe, RecipeToggle};
use crate::resources::{load, Loadable};

/// One recipe with optimistic like/save
#[derive(Clone, Copy)]
pub struct RecipeDetail {
    state: RwSignal<Loadable<Recipe>>,
    id: Signal<u64>,
    api: StoredValue<ApiClient>,
}

impl RecipeDetail {
    pub fn recipe(&self) -> Option<Recipe> {
        self.state.with(|s| s.value().cloned())
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
            let id = this.id.get_untracked();
            load(&this.state, false, api.get_recipe(id)).await;
        });
    }

    pub fn toggle_like(&self) {
        self.toggle(RecipeToggle::Like);
    }

    pub fn toggle_save(&self) {
        self.toggle(RecipeToggle::Save);
    }

    fn toggle(&self, toggle: RecipeToggle) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            if let Err(e) = toggle_recipe(&this.state, &api, toggle).await {
                log::warn!("[RECIPE] {:?} toggle failed, reverted: {}", toggle, e);
            }
        });
    }
}

/// Load the recipe `id`; a new id drops the previous recipe before fetching
pub fn use_recipe(id: impl Into<Signal<u64>>) -> RecipeDetail {
    let handle = RecipeDetail {
        state: RwSignal::new(Loadable::default()),
        id: id.into(),
        api: StoredValue::new(use_api()),
    };

    Effect::new(move |previous: Option<u64>| {
        let id = handle.id.get();
        let restart = previous != Some(id);
        spawn_local(async move {
            let api = handle.api.get_value();
            load(&handle.state, restart, api.get_recipe(id)).await;
        });
        id
    });

    handle
}
