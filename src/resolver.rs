use crate::{
    encoding,
    error::{AdError, Result},
    models::{GenerateContentResponse, GeneratedAd, DEFAULT_AD_MIME_TYPE},
};

/// Picks the first inline image out of a reply.
pub fn resolve(response: &GenerateContentResponse) -> Result<GeneratedAd> {
    let inline = response
        .parts()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|inline| !inline.data.is_empty());

    match inline {
        Some(inline) => {
            let bytes = encoding::from_transport(&inline.data)?;
            let mime_type = if inline.mime_type.is_empty() {
                DEFAULT_AD_MIME_TYPE.to_string()
            } else {
                inline.mime_type.clone()
            };
            log::debug!("Resolved inline image ({} bytes, {})", bytes.len(), mime_type);
            Ok(GeneratedAd::new(bytes, mime_type))
        }
        None => {
            let detail = explain_missing_image(response);
            log::warn!(
                "Reply carried no image: {}",
                detail.as_deref().unwrap_or("no explanation")
            );
            Err(AdError::NoImageReturned { detail })
        }
    }
}

fn explain_missing_image(response: &GenerateContentResponse) -> Option<String> {
    let text = response
        .parts()
        .filter_map(|part| part.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !text.is_empty() {
        return Some(text);
    }

    if let Some(feedback) = &response.prompt_feedback {
        if let Some(message) = &feedback.block_reason_message {
            return Some(message.clone());
        }
        if let Some(reason) = &feedback.block_reason {
            return Some(format!("prompt blocked ({})", reason));
        }
    }

    response
        .candidates
        .iter()
        .filter_map(|candidate| candidate.finish_reason.as_deref())
        .find(|reason| *reason != "STOP")
        .map(|reason| format!("generation stopped ({})", reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_only_reply_is_no_image() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [
                {"text": "I can't create that image."},
                {"text": "Try another cover."}
            ]}, "finishReason": "STOP"}]}"#,
        );

        let err = resolve(&response).unwrap_err();
        assert_eq!(
            err,
            AdError::NoImageReturned {
                detail: Some("I can't create that image. Try another cover.".into())
            }
        );
    }

    #[test]
    fn test_first_inline_image_wins() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [
                {"text": "Here you go"},
                {"inlineData": {"mimeType": "image/png", "data": "AQID"}},
                {"inlineData": {"mimeType": "image/png", "data": "BAUG"}}
            ]}}]}"#,
        );

        let ad = resolve(&response).unwrap();
        assert_eq!(ad.bytes, vec![1, 2, 3]);
        assert_eq!(ad.mime_type, "image/png");
    }

    #[test]
    fn test_missing_mime_type_defaults_to_png() {
        let response =
            parse(r#"{"candidates": [{"content": {"parts": [{"inlineData": {"data": "AQID"}}]}}]}"#);
        assert_eq!(resolve(&response).unwrap().mime_type, "image/png");
    }

    #[test]
    fn test_empty_reply_is_no_image() {
        let err = resolve(&GenerateContentResponse::default()).unwrap_err();
        assert_eq!(err, AdError::NoImageReturned { detail: None });
    }

    #[test]
    fn test_blocked_prompt_is_explained() {
        let response = parse(
            r#"{"candidates": [], "promptFeedback": {"blockReason": "SAFETY"}}"#,
        );
        let err = resolve(&response).unwrap_err();
        assert_eq!(
            err,
            AdError::NoImageReturned {
                detail: Some("prompt blocked (SAFETY)".into())
            }
        );
    }

    #[test]
    fn test_finish_reason_is_explained() {
        let response = parse(r#"{"candidates": [{"finishReason": "IMAGE_SAFETY"}]}"#);
        let err = resolve(&response).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No image was generated: generation stopped (IMAGE_SAFETY)"
        );
    }

    #[test]
    fn test_corrupt_inline_data_is_transport_error() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "@@@"}}]}}]}"#,
        );
        assert!(matches!(resolve(&response), Err(AdError::Transport(_))));
    }
}
