//! RecipeShare App
//!
//! Root component: installs the session and planner contexts and switches
//! between the views.

use leptos::prelude::*;

use crate::api::{default_store, ApiClient};
use crate::components::{ActivityLog, AuthPanel, MealPlannerView, RecipeBrowser, RecipeForm, RecipePage, RecipeShelf};
use crate::config::ApiConfig;
use crate::context::provide_session;
use crate::hooks::provide_meal_planner;

/// Which view fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Feed,
    Recipe(u64),
    Create,
    Shelf,
    Planner,
}

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::new(&ApiConfig::from_env(), default_store());
    log::info!("[APP] Using API at {}", api.base_url());
    let session = provide_session(api);
    provide_meal_planner();

    let (route, set_route) = signal(Route::Feed);
    let open_recipe = Callback::new(move |id: u64| set_route.set(Route::Recipe(id)));

    let nav = move |target: Route, label: &'static str| {
        view! {
            <button
                class=move || if route.get() == target { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| set_route.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="app-layout">
            <header class="title-bar">
                <h1 on:click=move |_| set_route.set(Route::Feed)>"RecipeShare"</h1>
                <nav>
                    {nav(Route::Feed, "Recipes")}
                    <Show when=move || session.is_authenticated()>
                        {nav(Route::Create, "New recipe")}
                        {nav(Route::Shelf, "My kitchen")}
                    </Show>
                    {nav(Route::Planner, "Meal plan")}
                </nav>
                <AuthPanel />
            </header>

            <main class="main-content">
                {move || match route.get() {
                    Route::Feed => view! { <RecipeBrowser on_open=open_recipe /> }.into_any(),
                    Route::Recipe(id) => view! {
                        <RecipePage id=id on_back=move |_: ()| set_route.set(Route::Feed) />
                    }.into_any(),
                    Route::Create => view! { <RecipeForm on_created=open_recipe /> }.into_any(),
                    Route::Shelf => view! { <RecipeShelf on_open=open_recipe /> }.into_any(),
                    Route::Planner => view! { <MealPlannerView on_open=open_recipe /> }.into_any(),
                }}
            </main>

            <ActivityLog />
        </div>
    }
}
