//! Meal Planner Component
//!
//! Week grid of planned meals with week navigation.

use leptos::prelude::*;

use crate::hooks::use_meal_planner;
use crate::planner::{MealType, WEEKDAYS};

#[component]
pub fn MealPlannerView(#[prop(into)] on_open: Callback<u64>) -> impl IntoView {
    let planner = use_meal_planner();

    view! {
        <section class="meal-planner">
            <div class="planner-nav">
                <button on:click=move |_| planner.previous_week()>"‹ Previous"</button>
                <h2>{move || planner.week_label()}</h2>
                <button on:click=move |_| planner.next_week()>"Next ›"</button>
                <Show when=move || !planner.is_current_week()>
                    <button class="link-btn" on:click=move |_| planner.this_week()>"This week"</button>
                </Show>
            </div>
            <p class="planner-count">
                {move || format!("{} meals planned, {} different recipes", planner.planned_count(), planner.recipe_count())}
            </p>
            <table class="planner-grid">
                <thead>
                    <tr>
                        <th></th>
                        {MealType::ALL.into_iter().map(|m| view! { <th>{m.label()}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {WEEKDAYS.into_iter().map(|day| view! {
                        <tr>
                            <th>{move || planner.date_label(day)}</th>
                            {MealType::ALL.into_iter().map(|meal| view! {
                                <td class="planner-slot">
                                    {move || match planner.meal(day, meal) {
                                        Some(planned) => {
                                            let recipe_id = planned.recipe_id;
                                            view! {
                                                <span class="planned-meal" on:click=move |_| on_open.run(recipe_id)>
                                                    {planned.title.clone()}
                                                </span>
                                                <button class="delete-btn" on:click=move |_| planner.clear(day, meal)>"×"</button>
                                            }.into_any()
                                        }
                                        None => view! { <span class="empty-slot">"-"</span> }.into_any(),
                                    }}
                                </td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            <ul class="planner-summary">
                {WEEKDAYS.into_iter().map(|day| view! {
                    <li>
                        <strong>{move || planner.date_label(day)}</strong>
                        {move || {
                            let meals = planner.day(day);
                            if meals.is_empty() {
                                " nothing planned".to_string()
                            } else {
                                meals
                                    .iter()
                                    .map(|(meal, planned)| format!(" {}: {}", meal.label(), planned.title))
                                    .collect::<Vec<_>>()
                                    .join(",")
                            }
                        }}
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}
