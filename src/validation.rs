//! Client-side Validation
//!
//! Checks run before a request is dispatched. A failure here never reaches
//! the network.

use thiserror::Error;

use crate::models::{Difficulty, Ingredient, NewRecipe, Registration};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 100;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 50;
/// Minutes; 24 hours
pub const MIN_TIME: u32 = 1;
pub const MAX_TIME: u32 = 1440;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must be between {min} and {max}")]
    Range {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Please enter a valid email address")]
    Email,

    #[error("Add at least one ingredient")]
    NoIngredients,

    #[error("Add at least one instruction step")]
    NoInstructions,

    #[error("Image must be smaller than {} MB", MAX_IMAGE_BYTES / (1024 * 1024))]
    ImageTooLarge,

    #[error("Unsupported image format {0}; use JPEG, PNG or WebP")]
    ImageFormat(String),
}

fn check_length(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(ValidationError::Required { field });
    }
    if len < min || len > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::Range { field, min, max })
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Required { field: "Email" });
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    };
    if valid { Ok(()) } else { Err(ValidationError::Email) }
}

/// Login only requires both fields; the server decides the rest
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required { field: "Email" });
    }
    if password.is_empty() {
        return Err(ValidationError::Required { field: "Password" });
    }
    Ok(())
}

/// Trim and check a sign-up form
pub fn validate_registration(email: &str, password: &str, name: &str) -> Result<Registration, ValidationError> {
    let email = email.trim();
    let name = name.trim();
    check_email(email)?;
    check_length("Password", password, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)?;
    check_length("Name", name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
    Ok(Registration {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    })
}

/// Raw state of the recipe authoring form
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub category: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub published: bool,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: None,
            prep_time: 15,
            cook_time: 30,
            servings: 4,
            difficulty: Difficulty::Easy,
            category: None,
            ingredients: vec![Ingredient::default()],
            instructions: vec![String::new()],
            tags: Vec::new(),
            published: true,
        }
    }
}

impl RecipeDraft {
    /// Check limits and normalize into a request body.
    ///
    /// Blank ingredient rows and instruction steps are dropped, text is trimmed,
    /// tags are lowercased and de-duplicated in first-seen order.
    pub fn validate(&self) -> Result<NewRecipe, ValidationError> {
        let title = self.title.trim();
        let description = self.description.trim();
        check_length("Title", title, MIN_TITLE_LENGTH, MAX_TITLE_LENGTH)?;
        check_length("Description", description, MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH)?;
        check_range("Prep time", self.prep_time, MIN_TIME, MAX_TIME)?;
        check_range("Cook time", self.cook_time, MIN_TIME, MAX_TIME)?;
        check_range("Servings", self.servings, MIN_SERVINGS, MAX_SERVINGS)?;

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter(|i| !i.name.trim().is_empty())
            .map(|i| Ingredient {
                quantity: i.quantity.trim().to_string(),
                unit: i.unit.trim().to_string(),
                name: i.name.trim().to_string(),
            })
            .collect();
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        let instructions: Vec<String> = self
            .instructions
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if instructions.is_empty() {
            return Err(ValidationError::NoInstructions);
        }

        let mut tags: Vec<String> = Vec::new();
        for tag in &self.tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(NewRecipe {
            title: title.to_string(),
            description: description.to_string(),
            image_url: non_blank(&self.image_url),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            category: non_blank(&self.category),
            ingredients,
            instructions,
            tags,
            published: self.published,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !ACCEPTED_IMAGE_TYPES.contains(&self.content_type.as_str()) {
            return Err(ValidationError::ImageFormat(self.content_type.clone()));
        }
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(ValidationError::ImageTooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Lemon Tart".into(),
            description: "Bright and buttery tart.".into(),
            ingredients: vec![
                Ingredient { quantity: "3".into(), unit: "whole".into(), name: " lemons ".into() },
                Ingredient::default(),
            ],
            instructions: vec!["Make the crust".into(), "   ".into(), "Fill and bake".into()],
            tags: vec!["Dessert".into(), "dessert ".into(), "".into(), "citrus".into()],
            category: Some("  ".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let recipe = valid_draft().validate().unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "lemons");
        assert_eq!(recipe.instructions, vec!["Make the crust", "Fill and bake"]);
        assert_eq!(recipe.tags, vec!["dessert", "citrus"]);
        assert_eq!(recipe.category, None);
    }

    #[test]
    fn test_short_description_is_rejected() {
        let draft = RecipeDraft {
            title: "Test".into(),
            description: "Too short".into(),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Length { field: "Description", min: 10, max: 500 }
        );
        assert_eq!(err.to_string(), "Description must be between 10 and 500 characters");
    }

    #[test]
    fn test_missing_title_and_ranges() {
        let draft = RecipeDraft { title: "  ".into(), ..valid_draft() };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::Required { field: "Title" });

        let draft = RecipeDraft { servings: 0, ..valid_draft() };
        assert_eq!(draft.validate().unwrap_err().to_string(), "Servings must be between 1 and 50");

        let draft = RecipeDraft { cook_time: 2000, ..valid_draft() };
        assert!(matches!(draft.validate(), Err(ValidationError::Range { field: "Cook time", .. })));
    }

    #[test]
    fn test_empty_ingredients_and_instructions() {
        let draft = RecipeDraft { ingredients: vec![Ingredient::default()], ..valid_draft() };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::NoIngredients);

        let draft = RecipeDraft { instructions: vec![" ".into()], ..valid_draft() };
        assert_eq!(draft.validate().unwrap_err(), ValidationError::NoInstructions);
    }

    #[test]
    fn test_registration_rules() {
        let reg = validate_registration(" cook@example.com ", "secret1", " Ana ").unwrap();
        assert_eq!(reg.email, "cook@example.com");
        assert_eq!(reg.name, "Ana");

        assert_eq!(validate_registration("cook@", "secret1", "Ana").unwrap_err(), ValidationError::Email);
        assert_eq!(validate_registration("cook.example.com", "secret1", "Ana").unwrap_err(), ValidationError::Email);
        assert!(matches!(
            validate_registration("cook@example.com", "abc", "Ana"),
            Err(ValidationError::Length { field: "Password", .. })
        ));
        assert!(matches!(
            validate_registration("cook@example.com", "secret1", "A"),
            Err(ValidationError::Length { field: "Name", .. })
        ));
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("a@b.co", "x").is_ok());
        assert_eq!(validate_login(" ", "x").unwrap_err(), ValidationError::Required { field: "Email" });
        assert_eq!(validate_login("a@b.co", "").unwrap_err(), ValidationError::Required { field: "Password" });
    }

    #[test]
    fn test_image_limits() {
        let image = ImageUpload {
            file_name: "pie.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0; 1024],
        };
        assert!(image.validate().is_ok());

        let gif = ImageUpload { content_type: "image/gif".into(), ..image.clone() };
        assert_eq!(gif.validate().unwrap_err(), ValidationError::ImageFormat("image/gif".into()));

        let huge = ImageUpload { bytes: vec![0; MAX_IMAGE_BYTES + 1], ..image };
        assert_eq!(huge.validate().unwrap_err().to_string(), "Image must be smaller than 5 MB");
    }
}
