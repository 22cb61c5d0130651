//! Recipe Endpoints
//!
//! Listing, CRUD, and the like/save sub-resources.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Page, Recipe, RecipeFilters, RecipeUpdate};
use crate::validation::RecipeDraft;

impl ApiClient {
    pub async fn list_recipes(&self, filters: &RecipeFilters) -> ApiResult<Page<Recipe>> {
        let url = self.endpoint_with_query(&["recipes"], &filters.query_pairs());
        self.send(self.request(Method::GET, url)).await
    }

    pub async fn get_recipe(&self, id: u64) -> ApiResult<Recipe> {
        let url = self.endpoint(&["recipes", id.to_string().as_str()]);
        self.send(self.request(Method::GET, url)).await
    }

    /// Validate the draft and publish it. An invalid draft is rejected
    /// without touching the network.
    pub async fn create_recipe(&self, draft: &RecipeDraft) -> ApiResult<Recipe> {
        let body = draft.validate()?;
        let request = self
            .request(Method::POST, self.endpoint(&["recipes"]))
            .json(&body);
        self.send(request).await
    }

    pub async fn update_recipe(&self, id: u64, update: &RecipeUpdate) -> ApiResult<Recipe> {
        let request = self
            .request(Method::PUT, self.endpoint(&["recipes", id.to_string().as_str()]))
            .json(update);
        self.send(request).await
    }

    pub async fn delete_recipe(&self, id: u64) -> ApiResult<()> {
        let url = self.endpoint(&["recipes", id.to_string().as_str()]);
        self.send_unit(self.request(Method::DELETE, url)).await
    }

    pub async fn user_recipes(&self, user_id: u64) -> ApiResult<Vec<Recipe>> {
        let url = self.endpoint(&["users", user_id.to_string().as_str(), "recipes"]);
        self.send(self.request(Method::GET, url)).await
    }

    pub async fn saved_recipes(&self) -> ApiResult<Vec<Recipe>> {
        let url = self.endpoint(&["recipes", "saved"]);
        self.send(self.request(Method::GET, url)).await
    }

    // ========================
    // Likes & Saves
    // ========================

    pub async fn like_recipe(&self, id: u64) -> ApiResult<()> {
        self.recipe_flag(Method::POST, id, "like").await
    }

    pub async fn unlike_recipe(&self, id: u64) -> ApiResult<()> {
        self.recipe_flag(Method::DELETE, id, "like").await
    }

    pub async fn save_recipe(&self, id: u64) -> ApiResult<()> {
        self.recipe_flag(Method::POST, id, "save").await
    }

    pub async fn unsave_recipe(&self, id: u64) -> ApiResult<()> {
        self.recipe_flag(Method::DELETE, id, "save").await
    }

    async fn recipe_flag(&self, method: Method, id: u64, flag: &str) -> ApiResult<()> {
        let url = self.endpoint(&["recipes", id.to_string().as_str(), flag]);
        self.send_unit(self.request(method, url)).await
    }
}
