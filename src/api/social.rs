//! Follow and Category Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::Category;

impl ApiClient {
    pub async fn follow_user(&self, user_id: u64) -> ApiResult<()> {
        let url = self.endpoint(&["users", user_id.to_string().as_str(), "follow"]);
        self.send_unit(self.request(Method::POST, url)).await
    }

    pub async fn unfollow_user(&self, user_id: u64) -> ApiResult<()> {
        let url = self.endpoint(&["users", user_id.to_string().as_str(), "follow"]);
        self.send_unit(self.request(Method::DELETE, url)).await
    }

    pub async fn categories(&self) -> ApiResult<Vec<Category>> {
        self.send(self.request(Method::GET, self.endpoint(&["categories"]))).await
    }
}
