//! Resource Hooks
//!
//! Reactive wrappers binding the resource drivers to Leptos signals. Each hook
//! reloads when its key signal changes and returns a `Copy` handle.

mod comments;
mod create;
mod planner;
mod recipe;
mod recipes;

#[cfg(test)]
mod tests;

pub use comments::{use_comments, CommentThread};
pub use create::{use_create_recipe, CreateRecipe};
pub use planner::{provide_meal_planner, use_meal_planner, MealPlannerHandle};
pub use recipe::{use_recipe, RecipeDetail};
pub use recipes::{use_recipes, RecipeFeed};
