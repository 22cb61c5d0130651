//! Recipe Browser Component
//!
//! Filter bar plus the paginated recipe grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RecipeCard;
use crate::context::use_api;
use crate::hooks::use_recipes;
use crate::models::{Category, Difficulty, RecipeFilters};

#[component]
pub fn RecipeBrowser(#[prop(into)] on_open: Callback<u64>) -> impl IntoView {
    let api = use_api();
    let filters = RwSignal::new(RecipeFilters::default());
    let feed = use_recipes(filters);

    let (search, set_search) = signal(String::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());

    // Categories are optional chrome; failure just leaves the select empty
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.categories().await {
                Ok(loaded) => set_categories.set(loaded),
                Err(e) => log::warn!("[BROWSER] Failed to load categories: {}", e),
            }
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = search.get();
        filters.update(|f| f.search = Some(text).filter(|t| !t.trim().is_empty()));
    };

    let on_category = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filters.update(|f| f.category = Some(value).filter(|v| !v.is_empty()));
    };

    let on_difficulty = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filters.update(|f| {
            f.difficulty = Difficulty::ALL.into_iter().find(|d| d.as_str() == value);
        });
    };

    view! {
        <section class="recipe-browser">
            <form class="filter-bar" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search recipes..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=on_category>
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |c| view! { <option value=c.filter_value()>{c.name.clone()}</option> }
                    />
                </select>
                <select on:change=on_difficulty>
                    <option value="">"Any difficulty"</option>
                    {Difficulty::ALL.into_iter().map(|d| view! {
                        <option value=d.as_str()>{d.label()}</option>
                    }).collect_view()}
                </select>
                <button type="submit">"Search"</button>
                <button type="button" on:click=move |_| feed.refresh()>"Refresh"</button>
            </form>

            {move || feed.error().map(|e| view! { <p class="form-error">{e}</p> })}
            <p class="feed-total">{move || format!("{} recipes", feed.total())}</p>

            <div class="recipe-grid">
                <For
                    each=move || feed.recipes()
                    key=|r| (r.id, r.likes_count, r.comments_count)
                    children=move |recipe| view! { <RecipeCard recipe=recipe on_open=on_open /> }
                />
            </div>

            <Show when=move || feed.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || feed.has_more() && !feed.is_loading()>
                <button class="load-more" on:click=move |_| feed.load_more()>"Load more"</button>
            </Show>
        </section>
    }
}
