use crate::encoding;
use std::path::Path;

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// An uploaded book cover, kept as raw bytes plus its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl CoverImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    /// Builds a cover from file contents, detecting the media type from the
    /// bytes first and the file extension second.
    pub fn from_file_contents(bytes: Vec<u8>, path: &Path) -> Self {
        let mime_type = detect_mime_type(&bytes, path);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Self {
            bytes,
            mime_type: mime_type.to_string(),
            file_name,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn preview_data_uri(&self) -> String {
        encoding::data_uri(&self.mime_type, &self.bytes)
    }

    pub fn transport_data(&self) -> String {
        encoding::to_transport(&self.bytes)
    }
}

pub fn detect_mime_type(bytes: &[u8], path: &Path) -> &'static str {
    mime_from_magic_bytes(bytes)
        .or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(mime_from_extension)
        })
        .unwrap_or(FALLBACK_MIME_TYPE)
}

fn mime_from_magic_bytes(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    None
}

fn mime_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 12] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn test_magic_bytes_win_over_extension() {
        let cover = CoverImage::from_file_contents(PNG_HEADER.to_vec(), Path::new("cover.jpg"));
        assert_eq!(cover.mime_type, "image/png");
        assert_eq!(cover.file_name.as_deref(), Some("cover.jpg"));
    }

    #[test]
    fn test_extension_fallback() {
        let cover = CoverImage::from_file_contents(vec![1, 2, 3], Path::new("Cover.JPEG"));
        assert_eq!(cover.mime_type, "image/jpeg");
    }

    #[test]
    fn test_unknown_file_is_accepted_as_is() {
        let cover = CoverImage::from_file_contents(b"hello".to_vec(), Path::new("notes.txt"));
        assert_eq!(cover.mime_type, FALLBACK_MIME_TYPE);
        assert!(!cover.is_image());
        assert_eq!(cover.bytes, b"hello");
    }

    #[test]
    fn test_webp_detection() {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(b"WEBPVP8 ");
        assert_eq!(detect_mime_type(&data, Path::new("x")), "image/webp");
    }

    #[test]
    fn test_preview_is_data_uri() {
        let cover = CoverImage::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg");
        assert_eq!(cover.preview_data_uri(), "data:image/jpeg;base64,/9j/");
    }
}
