use crate::{
    error::Result,
    models::{GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;

/// The external image-generation collaborator.
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;

    fn model(&self) -> &str;
}
