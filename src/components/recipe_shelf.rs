//! Recipe Shelf Component
//!
//! The signed-in user's saved recipes and own recipes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RecipeCard;
use crate::context::{use_api, use_session};
use crate::models::Recipe;
use crate::resources::{load, Loadable};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shelf {
    Saved,
    Mine,
}

#[component]
pub fn RecipeShelf(#[prop(into)] on_open: Callback<u64>) -> impl IntoView {
    let session = use_session();
    let api = StoredValue::new(use_api());
    let shelf = RwSignal::new(Shelf::Saved);
    let state = RwSignal::new(Loadable::<Vec<Recipe>>::default());

    Effect::new(move |_| {
        let which = shelf.get();
        let Some(user_id) = session.user_id() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            match which {
                Shelf::Saved => load(&state, true, api.saved_recipes()).await,
                Shelf::Mine => load(&state, true, api.user_recipes(user_id)).await,
            };
        });
    });

    let tab = move |which: Shelf, label: &'static str| {
        view! {
            <button
                class=move || if shelf.get() == which { "workspace-tab active" } else { "workspace-tab" }
                on:click=move |_| shelf.set(which)
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="recipe-shelf">
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! { <p class="hint">"Log in to see your recipes."</p> }
            >
                <div class="workspace-tab-bar">
                    {tab(Shelf::Saved, "Saved")}
                    {tab(Shelf::Mine, "My recipes")}
                </div>
                {move || state.with(|s| s.error().map(str::to_string)).map(|e| view! { <p class="form-error">{e}</p> })}
                <Show when=move || state.with(Loadable::is_loading)>
                    <div class="loading">"Loading..."</div>
                </Show>
                <div class="recipe-grid">
                    <For
                        each=move || state.with(|s| s.value().cloned().unwrap_or_default())
                        key=|r| r.id
                        children=move |recipe| view! { <RecipeCard recipe=recipe on_open=on_open /> }
                    />
                </div>
            </Show>
        </section>
    }
}
