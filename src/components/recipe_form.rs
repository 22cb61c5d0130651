//! Recipe Form Component
//!
//! Authoring form for a new recipe. Ingredients and steps are entered one per
//! line; the draft is validated before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::hooks::use_create_recipe;
use crate::models::{Difficulty, Ingredient};
use crate::validation::{ImageUpload, RecipeDraft};

/// Words recognized as a unit right after the quantity
const UNITS: &[&str] = &[
    "cup", "cups", "tbsp", "tsp", "g", "kg", "ml", "l", "oz", "lb", "lbs", "pinch", "clove", "cloves",
    "slice", "slices", "can", "cans", "whole",
];

/// Split "2 cups flour" into quantity, unit and name. Quantity and unit are
/// optional: "salt" is just a name.
pub fn parse_ingredient_line(line: &str) -> Ingredient {
    let mut words = line.split_whitespace().peekable();
    let quantity = words
        .next_if(|w| w.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or_default();
    let unit = if quantity.is_empty() {
        ""
    } else {
        words
            .next_if(|w| UNITS.contains(&w.to_lowercase().as_str()))
            .unwrap_or_default()
    };
    Ingredient {
        quantity: quantity.to_string(),
        unit: unit.to_string(),
        name: words.collect::<Vec<_>>().join(" "),
    }
}

fn parse_minutes(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

async fn read_image(file: web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file".to_string())?;
    Ok(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn RecipeForm(#[prop(into)] on_created: Callback<u64>) -> impl IntoView {
    let create = use_create_recipe();
    let draft = RwSignal::new(RecipeDraft::default());
    let (ingredients, set_ingredients) = signal(String::new());
    let (instructions, set_instructions) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_file = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_error.set(None);
        spawn_local(async move {
            let uploaded = match read_image(file).await {
                Ok(image) => create.upload(image).await,
                Err(e) => Err(e),
            };
            match uploaded {
                Ok(url) => draft.update(|d| d.image_url = Some(url)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let mut submitted = draft.get();
        submitted.ingredients = ingredients.get().lines().map(parse_ingredient_line).collect();
        submitted.instructions = instructions.get().lines().map(str::to_string).collect();
        submitted.tags = tags.get().split(',').map(str::to_string).collect();
        spawn_local(async move {
            match create.submit(submitted).await {
                Ok(recipe) => on_created.run(recipe.id),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <h2>"New recipe"</h2>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>
            <div class="form-row">
                <label>
                    "Prep (min)"
                    <input
                        type="number"
                        prop:value=move || draft.with(|d| d.prep_time.to_string())
                        on:input=move |ev| draft.update(|d| d.prep_time = parse_minutes(&event_target_value(&ev)))
                    />
                </label>
                <label>
                    "Cook (min)"
                    <input
                        type="number"
                        prop:value=move || draft.with(|d| d.cook_time.to_string())
                        on:input=move |ev| draft.update(|d| d.cook_time = parse_minutes(&event_target_value(&ev)))
                    />
                </label>
                <label>
                    "Servings"
                    <input
                        type="number"
                        prop:value=move || draft.with(|d| d.servings.to_string())
                        on:input=move |ev| draft.update(|d| d.servings = parse_minutes(&event_target_value(&ev)))
                    />
                </label>
            </div>
            <div class="type-selector-row">
                {Difficulty::ALL.into_iter().map(|difficulty| view! {
                    <button
                        type="button"
                        class=move || if draft.with(|d| d.difficulty == difficulty) { "type-btn active" } else { "type-btn" }
                        on:click=move |_| draft.update(|d| d.difficulty = difficulty)
                    >
                        {difficulty.label()}
                    </button>
                }).collect_view()}
            </div>
            <label>
                "Category"
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.category.clone().unwrap_or_default())
                    on:input=move |ev| draft.update(|d| d.category = Some(event_target_value(&ev)))
                />
            </label>
            <label>
                "Ingredients (one per line, e.g. \"2 cups flour\")"
                <textarea
                    prop:value=move || ingredients.get()
                    on:input=move |ev| set_ingredients.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Steps (one per line)"
                <textarea
                    prop:value=move || instructions.get()
                    on:input=move |ev| set_instructions.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Tags (comma separated)"
                <input
                    type="text"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Cover image"
                <input type="file" accept="image/jpeg,image/png,image/webp" on:change=on_file />
            </label>
            <Show when=move || create.is_uploading()>
                <span class="loading">"Uploading..."</span>
            </Show>
            {move || draft.with(|d| d.image_url.clone()).map(|src| view! { <img class="form-preview" src=src alt="" /> })}
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.published)
                    on:change=move |ev| draft.update(|d| d.published = event_target_checked(&ev))
                />
                "Publish now"
            </label>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" disabled=move || create.is_pending() || create.is_uploading()>
                {move || if create.is_pending() { "Saving..." } else { "Create recipe" }}
            </button>
        </form>
    }
}
