use leptos::prelude::*;

use crate::models::Recipe;

/// Summary tile in the recipe grid
#[component]
pub fn RecipeCard(recipe: Recipe, #[prop(into)] on_open: Callback<u64>) -> impl IntoView {
    let id = recipe.id;
    let total_time = recipe.total_time();

    view! {
        <article class="recipe-card" on:click=move |_| on_open.run(id)>
            {recipe.image_url.clone().map(|src| view! { <img class="recipe-card-image" src=src alt="" /> })}
            <div class="recipe-card-body">
                <h3 class="recipe-card-title">{recipe.title.clone()}</h3>
                <p class="recipe-card-author">{format!("by {}", recipe.author.name)}</p>
                <div class="recipe-card-meta">
                    <span>{format!("{} min", total_time)}</span>
                    <span>{recipe.difficulty.label()}</span>
                    <span>{format!("♥ {}", recipe.likes_count)}</span>
                    <span>{format!("💬 {}", recipe.comments_count)}</span>
                </div>
            </div>
        </article>
    }
}
