use crate::models::{CoverImage, OutputPreset};
use uuid::Uuid;

/// A validated, ready-to-send generation attempt. Built fresh for every
/// attempt and dropped once the call completes.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub attempt_id: Uuid,
    pub cover: CoverImage,
    pub title: String,
    pub description: String,
    pub preset: &'static OutputPreset,
    pub prompt: String,
}
