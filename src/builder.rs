//! Turns the captured form values into a validated request and the
//! outbound `generateContent` payload.

use crate::{
    capture::InputCapture,
    config::is_usable_key,
    error::{AdError, Result},
    models::{
        Content, GenerateContentRequest, GenerationConfig, GenerationRequest, ImageConfig,
        OutputPreset, Part,
    },
};
use uuid::Uuid;

/// Used in place of the description when the author leaves it blank.
pub const DEFAULT_DESCRIPTION: &str =
    "A captivating, page-turning read that readers won't be able to put down.";

pub const BRAND_NAME: &str = "Kindle";

/// Builds the instruction sent alongside the cover. Depends only on its
/// arguments.
pub fn compose_prompt(preset: &OutputPreset, title: &str, description: &str) -> String {
    let description = if description.trim().is_empty() {
        DEFAULT_DESCRIPTION
    } else {
        description
    };

    let directives = [
        "Place the book in an inviting lifestyle scene that suits its genre, \
         such as a cozy reading nook, a cafe table or a sunlit bedside."
            .to_string(),
        "Use soft, warm natural lighting with a shallow depth of field, \
         like a professional product photograph."
            .to_string(),
        format!(
            "Add a subtle nod to {} availability, for example an e-reader resting beside the book.",
            BRAND_NAME
        ),
        "Do not add any text, captions, logos or overlays to the image.".to_string(),
        "Reproduce the supplied book cover exactly as given. Keep its artwork, \
         colours and typography unchanged and fully legible."
            .to_string(),
    ];

    let mut prompt = format!(
        "Create a scroll-stopping advertisement image formatted for {} ({}) \
         promoting the book titled \"{}\".\n\nAbout the book: {}\n\nRequirements:",
        preset.display_name, preset.aspect_ratio, title, description
    );
    for directive in &directives {
        prompt.push_str("\n- ");
        prompt.push_str(directive);
    }
    prompt
}

/// Validates the form and produces a request for one attempt.
///
/// Missing cover or blank title is reported before a missing credential.
pub fn build_request(capture: &InputCapture, credential: Option<&str>) -> Result<GenerationRequest> {
    let cover = capture
        .cover()
        .ok_or_else(|| AdError::MissingInput("please upload a book cover image".into()))?;

    if capture.title().trim().is_empty() {
        return Err(AdError::MissingInput("please enter the book title".into()));
    }

    if !is_usable_key(credential) {
        return Err(AdError::MissingCredential);
    }

    let preset = capture.preset();
    let prompt = compose_prompt(preset, capture.title(), capture.description());

    Ok(GenerationRequest {
        attempt_id: Uuid::new_v4(),
        cover: cover.clone(),
        title: capture.title().to_string(),
        description: capture.description().to_string(),
        preset,
        prompt,
    })
}

/// Cover first, then the instruction; one image at the preset's ratio.
pub fn build_payload(request: &GenerationRequest) -> GenerateContentRequest {
    let parts = vec![
        Part::inline(request.cover.mime_type.clone(), request.cover.transport_data()),
        Part::text(request.prompt.clone()),
    ];

    GenerateContentRequest {
        contents: vec![Content { role: None, parts }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            candidate_count: 1,
            image_config: ImageConfig {
                aspect_ratio: request.preset.aspect_ratio.as_str().to_string(),
            },
        },
    }
}
