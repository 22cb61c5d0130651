//! Comment Endpoints

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::Comment;
use crate::validation::ValidationError;

#[derive(Serialize)]
struct NewComment<'a> {
    content: &'a str,
}

impl ApiClient {
    pub async fn list_comments(&self, recipe_id: u64) -> ApiResult<Vec<Comment>> {
        let url = self.endpoint(&["recipes", recipe_id.to_string().as_str(), "comments"]);
        self.send(self.request(Method::GET, url)).await
    }

    /// Post a comment; blank content is rejected before dispatch
    pub async fn add_comment(&self, recipe_id: u64, content: &str) -> ApiResult<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::Required { field: "Comment" }.into());
        }
        let request = self
            .request(Method::POST, self.endpoint(&["recipes", recipe_id.to_string().as_str(), "comments"]))
            .json(&NewComment { content });
        self.send(request).await
    }

    pub async fn delete_comment(&self, recipe_id: u64, comment_id: u64) -> ApiResult<()> {
        let url = self.endpoint(&[
            "recipes",
            recipe_id.to_string().as_str(),
            "comments",
            comment_id.to_string().as_str(),
        ]);
        self.send_unit(self.request(Method::DELETE, url)).await
    }
}
