use crate::{
    config::GeminiConfig,
    error::{AdError, Result, GENERIC_FAILURE_MESSAGE},
    gemini::ImageService,
    models::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    model: String,
    endpoint: String,
}

impl ImageClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl ImageService for ImageClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        log::info!("Requesting ad image from model: {}", self.model);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Image request failed to send: {}", e);
                AdError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Image service returned {}: {}", status, body);
            return Err(AdError::Transport(service_error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Unreadable image service reply: {}", e);
            AdError::Transport(format!("Unexpected response from image service: {}", e))
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// The service-reported message from an error body, or the generic fallback.
pub fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let client = ImageClient::new(
            &GeminiConfig::new()
                .with_model("gemini-2.5-flash-image")
                .with_endpoint("http://localhost:9000/v1beta/"),
        );
        assert_eq!(
            client.url(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
        assert_eq!(client.model(), "gemini-2.5-flash-image");
    }

    #[test]
    fn test_service_error_message_is_surfaced() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid. Please pass a valid API key.", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(
            service_error_message(body),
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn test_service_error_message_fallback() {
        assert_eq!(service_error_message("<html>502</html>"), GENERIC_FAILURE_MESSAGE);
        assert_eq!(
            service_error_message(r#"{"error": {"code": 500}}"#),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(service_error_message(""), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let client = ImageClient::new(&GeminiConfig::new().with_endpoint("http://127.0.0.1:1"));
        let request = crate::builder::build_payload(&crate::models::GenerationRequest {
            attempt_id: uuid::Uuid::new_v4(),
            cover: crate::models::CoverImage::new(vec![1], "image/png"),
            title: "T".into(),
            description: String::new(),
            preset: crate::models::OutputPreset::default_preset(),
            prompt: "p".into(),
        });

        let err = client.generate_content("key", &request).await.unwrap_err();
        assert!(matches!(err, AdError::Transport(_)));
    }
}
