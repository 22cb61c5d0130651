//! Optimistic Updates
//!
//! Apply a change locally, send the request, and put the touched fields back
//! if the request fails. Only the fields a change owns are restored, so a like
//! and a save racing each other do not undo one another.

use std::future::Future;

use super::{Loadable, StateCell};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::Recipe;

/// Snapshot, apply, request, restore on failure.
///
/// Returns `Ok(false)` when nothing is loaded yet (no request is sent). The
/// revert is skipped if a reload replaced the value while the request was in
/// flight; the fresh server copy wins. A reload that merely started, or that
/// failed, does not count.
pub async fn commit<T, C, Req, Fut>(
    cell: &C,
    apply: impl FnOnce(&mut T),
    revert: impl FnOnce(&mut T, &T),
    request: Req,
) -> ApiResult<bool>
where
    T: Clone,
    C: StateCell<Loadable<T>>,
    Req: FnOnce(&T) -> Fut,
    Fut: Future<Output = ApiResult<()>>,
{
    let snapshot = cell
        .peek(|s| s.value().cloned().map(|v| (v, s.version())))
        .flatten();
    let Some((before, version)) = snapshot else {
        return Ok(false);
    };

    cell.update_with(|s| {
        if let Some(value) = s.value_mut() {
            apply(value);
        }
    });

    match request(&before).await {
        Ok(()) => Ok(true),
        Err(err) => {
            cell.update_with(|s| {
                if s.version() != version {
                    return;
                }
                if let Some(value) = s.value_mut() {
                    revert(value, &before);
                }
                s.set_error(err.to_string());
            });
            Err(err)
        }
    }
}

/// Viewer flags on a recipe that flip with a POST/DELETE pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeToggle {
    Like,
    Save,
}

impl RecipeToggle {
    pub fn is_set(self, recipe: &Recipe) -> bool {
        match self {
            RecipeToggle::Like => recipe.is_liked,
            RecipeToggle::Save => recipe.is_saved,
        }
    }

    /// Flip the flag and keep the like counter in step
    pub fn flip(self, recipe: &mut Recipe) {
        match self {
            RecipeToggle::Like => {
                recipe.likes_count = if recipe.is_liked {
                    recipe.likes_count.saturating_sub(1)
                } else {
                    recipe.likes_count + 1
                };
                recipe.is_liked = !recipe.is_liked;
            }
            RecipeToggle::Save => recipe.is_saved = !recipe.is_saved,
        }
    }

    pub fn restore(self, recipe: &mut Recipe, before: &Recipe) {
        match self {
            RecipeToggle::Like => {
                recipe.is_liked = before.is_liked;
                recipe.likes_count = before.likes_count;
            }
            RecipeToggle::Save => recipe.is_saved = before.is_saved,
        }
    }
}

/// Toggle like/save on the loaded recipe with optimistic feedback
pub async fn toggle_recipe<C>(cell: &C, api: &ApiClient, toggle: RecipeToggle) -> ApiResult<bool>
where
    C: StateCell<Loadable<Recipe>>,
{
    commit(
        cell,
        |recipe| toggle.flip(recipe),
        |recipe, before| toggle.restore(recipe, before),
        |before| {
            let id = before.id;
            let was_set = toggle.is_set(before);
            async move {
                match (toggle, was_set) {
                    (RecipeToggle::Like, false) => api.like_recipe(id).await,
                    (RecipeToggle::Like, true) => api.unlike_recipe(id).await,
                    (RecipeToggle::Save, false) => api.save_recipe(id).await,
                    (RecipeToggle::Save, true) => api.unsave_recipe(id).await,
                }
            }
        },
    )
    .await
}
