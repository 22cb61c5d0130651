use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_api;
use crate::models::{Recipe, RecipeFilters};
use crate::resources::feed::{self, PagedList};

/// Paginated recipe list for a filter set
#[derive(Clone, Copy)]
pub struct RecipeFeed {
    state: RwSignal<PagedList<Recipe>>,
    filters: Signal<RecipeFilters>,
    api: StoredValue<ApiClient>,
}

impl RecipeFeed {
    pub fn recipes(&self) -> Vec<Recipe> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn total(&self) -> u64 {
        self.state.with(PagedList::total)
    }

    pub fn has_more(&self) -> bool {
        self.state.with(PagedList::has_more)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(PagedList::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn load_more(&self) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let filters = this.filters.get_untracked();
            feed::load_more(&this.state, &api, &filters).await;
        });
    }

    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let filters = this.filters.get_untracked();
            feed::refresh(&this.state, &api, &filters).await;
        });
    }
}

/// Load recipes matching `filters`, starting over whenever they change
pub fn use_recipes(filters: impl Into<Signal<RecipeFilters>>) -> RecipeFeed {
    let handle = RecipeFeed {
        state: RwSignal::new(PagedList::default()),
        filters: filters.into(),
        api: StoredValue::new(use_api()),
    };

    Effect::new(move |_| {
        let filters = handle.filters.get();
        spawn_local(async move {
            let api = handle.api.get_value();
            feed::refresh(&handle.state, &api, &filters).await;
        });
    });

    handle
}
