//! UI Components
//!
//! Thin Leptos views over the session context and resource hooks.

mod activity_log;
mod auth_panel;
mod comment_section;
mod delete_confirm_button;
mod meal_planner;
mod recipe_browser;
mod recipe_card;
mod recipe_form;
mod recipe_page;
mod recipe_shelf;

pub use activity_log::ActivityLog;
pub use auth_panel::AuthPanel;
pub use comment_section::CommentSection;
pub use delete_confirm_button::DeleteConfirmButton;
pub use meal_planner::MealPlannerView;
pub use recipe_browser::RecipeBrowser;
pub use recipe_card::RecipeCard;
pub use recipe_form::RecipeForm;
pub use recipe_page::RecipePage;
pub use recipe_shelf::RecipeShelf;
