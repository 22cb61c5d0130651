use leptos::prelude::*;

use crate::api::ApiClient;
use crate::context::use_api;
use crate::models::{Recipe, UploadedImage};
use crate::resources::{Loadable, StateCell};
use crate::validation::{ImageUpload, RecipeDraft};

/// Recipe authoring: image upload and draft submission
#[derive(Clone, Copy)]
pub struct CreateRecipe {
    state: RwSignal<Loadable<Recipe>>,
    uploading: RwSignal<bool>,
    api: StoredValue<ApiClient>,
}

impl CreateRecipe {
    pub fn created(&self) -> Option<Recipe> {
        self.state.with(|s| s.value().cloned())
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(Loadable::is_loading)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    /// Validate and post `draft`. Invalid drafts fail without a request.
    pub async fn submit(self, draft: RecipeDraft) -> Result<Recipe, String> {
        let api = self.api.get_value();
        let Some(ticket) = self.state.update_with(Loadable::begin) else {
            return Err("Form is no longer mounted".to_string());
        };
        let result = api.create_recipe(&draft).await;
        self.state.update_with(|s| s.settle(ticket, result.clone()));
        match result {
            Ok(recipe) => {
                log::info!("[CREATE] Created recipe {}", recipe.id);
                Ok(recipe)
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Upload a cover image and return its URL
    pub async fn upload(self, image: ImageUpload) -> Result<String, String> {
        let api = self.api.get_value();
        self.uploading.set(true);
        let result = api.upload_image(&image).await;
        self.uploading.set(false);
        result.map(|UploadedImage { url, .. }| url).map_err(|e| e.to_string())
    }
}

pub fn use_create_recipe() -> CreateRecipe {
    CreateRecipe {
        state: RwSignal::new(Loadable::default()),
        uploading: RwSignal::new(false),
        api: StoredValue::new(use_api()),
    }
}
