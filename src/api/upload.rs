//! Image Upload

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::UploadedImage;
use crate::validation::{ImageUpload, ValidationError};

impl ApiClient {
    /// Multipart upload under the `file` field; returns the hosted URL
    pub async fn upload_image(&self, image: &ImageUpload) -> ApiResult<UploadedImage> {
        image.validate()?;
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|_| ValidationError::ImageFormat(image.content_type.clone()))?;
        let request = self
            .request(Method::POST, self.endpoint(&["upload"]))
            .multipart(Form::new().part("file", part));
        self.send(request).await
    }
}
