//! Transport form (standard base64) and data URI helpers.

use crate::error::{AdError, Result};
use base64::{engine::general_purpose, Engine};

pub fn to_transport(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

pub fn from_transport(encoded: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| AdError::Transport(format!("Malformed image data in response: {}", e)))
}

pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, to_transport(bytes))
}
