//! Wire types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content fragment: text, inline binary data, or something this crate
/// does not use (all fields absent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    pub candidate_count: u32,
    pub image_config: ImageConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Content parts of every candidate, in reply order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
    #[serde(default)]
    pub block_reason_message: Option<String>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Here is your ad."},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                    ]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let parts: Vec<_> = resp.parts().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.as_deref(), Some("Here is your ad."));
        assert_eq!(
            parts[1].inline_data.as_ref().unwrap().mime_type,
            "image/png"
        );
        assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_unknown_part_kinds_deserialize_empty() {
        let json = r#"{"candidates": [{"content": {"parts": [{"thought": true}]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let part = resp.parts().next().unwrap();
        assert!(part.text.is_none());
        assert!(part.inline_data.is_none());
    }

    #[test]
    fn test_request_serialization_uses_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::inline("image/jpeg", "AAAA"), Part::text("hi")],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".into()],
                candidate_count: 1,
                image_config: ImageConfig {
                    aspect_ratio: "9:16".into(),
                },
            },
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["generationConfig"]["imageConfig"]["aspectRatio"],
            "9:16"
        );
        assert_eq!(json["generationConfig"]["candidateCount"], 1);
        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "image/jpeg"
        );
        assert!(json["contents"][0]["parts"][0].get("text").is_none());
        assert!(json["contents"][0].get("role").is_none());
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code, Some(400));
        assert_eq!(body.error.message.as_deref(), Some("API key not valid."));
    }
}
