//! Recipe Page Component
//!
//! Full recipe with like/save, follow, planning and the comment thread.

use chrono::Weekday;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CommentSection, DeleteConfirmButton};
use crate::context::{use_api, use_session};
use crate::hooks::{use_meal_planner, use_recipe};
use crate::models::RecipeUpdate;
use crate::planner::{MealType, WEEKDAYS};

#[component]
pub fn RecipePage(id: u64, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let session = use_session();
    let api = StoredValue::new(use_api());
    let planner = use_meal_planner();
    let detail = use_recipe(Signal::stored(id));

    // Recipes and profiles carry no follow flag, so this tracks only follows made on this page
    let (following, set_following) = signal(false);
    let (plan_day, set_plan_day) = signal(Weekday::Mon);
    let (plan_meal, set_plan_meal) = signal(MealType::Dinner);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let author_id = move || detail.recipe().map(|r| r.author.id);
    let is_own = move || author_id().is_some() && author_id() == session.user_id();

    let on_follow = move |_: leptos::ev::MouseEvent| {
        let Some(user_id) = author_id() else { return };
        let follow = !following.get();
        spawn_local(async move {
            let api = api.get_value();
            let result = if follow {
                api.follow_user(user_id).await
            } else {
                api.unfollow_user(user_id).await
            };
            match result {
                Ok(()) => set_following.set(follow),
                Err(e) => set_notice.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |_: ()| {
        spawn_local(async move {
            match api.get_value().delete_recipe(id).await {
                Ok(()) => on_back.run(()),
                Err(e) => set_notice.set(Some(e.to_string())),
            }
        });
    };

    let on_publish = move |_: leptos::ev::MouseEvent| {
        let Some(published) = detail.recipe().map(|r| r.published) else { return };
        let update = RecipeUpdate { published: Some(!published), ..Default::default() };
        spawn_local(async move {
            match api.get_value().update_recipe(id, &update).await {
                Ok(_) => detail.refresh(),
                Err(e) => set_notice.set(Some(e.to_string())),
            }
        });
    };

    let on_plan = move |_: leptos::ev::MouseEvent| {
        if let Some(recipe) = detail.recipe() {
            planner.assign(plan_day.get(), plan_meal.get(), &recipe);
            set_notice.set(Some(format!("Planned for {} {}", plan_day.get(), plan_meal.get().label())));
        }
    };

    let body = move || {
        detail.recipe().map(|recipe| {
            let liked = recipe.is_liked;
            let saved = recipe.is_saved;
            let published = recipe.published;
            view! {
                <article class="recipe-detail">
                    <h2>{recipe.title.clone()}</h2>
                    {recipe.image_url.clone().map(|src| view! { <img class="recipe-detail-image" src=src alt="" /> })}
                    <p class="recipe-description">{recipe.description.clone()}</p>
                    <div class="recipe-meta">
                        <span>{format!("Prep {} min", recipe.prep_time)}</span>
                        <span>{format!("Cook {} min", recipe.cook_time)}</span>
                        <span>{format!("Serves {}", recipe.servings)}</span>
                        <span>{recipe.difficulty.label()}</span>
                        {recipe.category.clone().map(|c| view! { <span class="recipe-category">{c}</span> })}
                    </div>
                    <div class="recipe-actions">
                        <button
                            class:active=liked
                            disabled=move || !session.is_authenticated()
                            on:click=move |_| detail.toggle_like()
                        >
                            {format!("{} {}", if liked { "♥" } else { "♡" }, recipe.likes_count)}
                        </button>
                        <button
                            class:active=saved
                            disabled=move || !session.is_authenticated()
                            on:click=move |_| detail.toggle_save()
                        >
                            {if saved { "Saved" } else { "Save" }}
                        </button>
                    </div>
                    <div class="recipe-author">
                        <span>{format!("by {}", recipe.author.name)}</span>
                        <Show when=move || session.is_authenticated() && !is_own()>
                            <button on:click=on_follow>
                                {move || if following.get() { "Unfollow" } else { "Follow" }}
                            </button>
                        </Show>
                        <Show when=is_own>
                            <button on:click=on_publish>
                                {if published { "Unpublish" } else { "Publish" }}
                            </button>
                            <DeleteConfirmButton label="Delete recipe" on_confirm=on_delete />
                        </Show>
                    </div>
                    <h3>"Ingredients"</h3>
                    <ul class="ingredients">
                        {recipe.ingredients.iter().map(|i| view! {
                            <li>{format!("{} {} {}", i.quantity, i.unit, i.name).trim().to_string()}</li>
                        }).collect_view()}
                    </ul>
                    <h3>"Steps"</h3>
                    <ol class="instructions">
                        {recipe.instructions.iter().map(|step| view! { <li>{step.clone()}</li> }).collect_view()}
                    </ol>
                    {(!recipe.tags.is_empty()).then(|| view! {
                        <div class="tags">
                            {recipe.tags.iter().map(|t| view! { <span class="tag">{format!("#{}", t)}</span> }).collect_view()}
                        </div>
                    })}
                </article>
            }
        })
    };

    view! {
        <div class="recipe-page">
            <button class="link-btn" on:click=move |_| on_back.run(())>"← Back"</button>
            <Show when=move || detail.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>
            {move || detail.error().map(|e| view! { <p class="form-error">{e}</p> })}
            {body}
            <Show when=move || detail.recipe().is_some()>
                <div class="plan-picker">
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(day) = WEEKDAYS.into_iter().find(|d| d.to_string() == value) {
                            set_plan_day.set(day);
                        }
                    }>
                        {WEEKDAYS.into_iter().map(|d| view! { <option value=d.to_string()>{d.to_string()}</option> }).collect_view()}
                    </select>
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(meal) = MealType::ALL.into_iter().find(|m| m.label() == value) {
                            set_plan_meal.set(meal);
                        }
                    }>
                        {MealType::ALL.into_iter().map(|m| view! {
                            <option value=m.label() selected={m == MealType::Dinner}>{m.label()}</option>
                        }).collect_view()}
                    </select>
                    <button on:click=on_plan>{move || format!("Add to plan ({})", planner.week_label())}</button>
                </div>
            </Show>
            {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
            <CommentSection recipe_id=id />
        </div>
    }
}
