use crate::{
    error::Result,
    models::{CoverImage, OutputPreset},
};
use std::path::Path;

/// Current form values: cover, title, description and selected format.
#[derive(Debug, Clone)]
pub struct InputCapture {
    cover: Option<CoverImage>,
    title: String,
    description: String,
    preset: &'static OutputPreset,
}

impl Default for InputCapture {
    fn default() -> Self {
        Self {
            cover: None,
            title: String::new(),
            description: String::new(),
            preset: OutputPreset::default_preset(),
        }
    }
}

impl InputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the cover from disk. On a read failure the previous cover is kept.
    pub async fn accept_image_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            log::error!("Failed to read cover {}: {}", path.display(), e);
            e
        })?;

        let cover = CoverImage::from_file_contents(bytes, path);
        log::debug!(
            "Loaded cover {} ({} bytes, {})",
            path.display(),
            cover.bytes.len(),
            cover.mime_type
        );
        self.store_cover(cover);
        Ok(())
    }

    pub fn accept_image(
        &mut self,
        bytes: Vec<u8>,
        mime_type: impl Into<String>,
        file_name: Option<String>,
    ) {
        let mut cover = CoverImage::new(bytes, mime_type);
        cover.file_name = file_name;
        self.store_cover(cover);
    }

    fn store_cover(&mut self, cover: CoverImage) {
        if !cover.is_image() {
            log::warn!(
                "Cover {} has media type {}; sending it anyway",
                cover.file_name.as_deref().unwrap_or("<unnamed>"),
                cover.mime_type
            );
        }
        self.cover = Some(cover);
    }

    pub fn clear_image(&mut self) {
        self.cover = None;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Switches to the preset with the given id. Unknown ids keep the
    /// current selection and return `false`.
    pub fn select_preset(&mut self, id: &str) -> bool {
        match OutputPreset::find(id) {
            Some(preset) => {
                self.preset = preset;
                true
            }
            None => {
                log::warn!("Unknown preset '{}', keeping '{}'", id, self.preset.id);
                false
            }
        }
    }

    pub fn cover(&self) -> Option<&CoverImage> {
        self.cover.as_ref()
    }

    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn preset(&self) -> &'static OutputPreset {
        self.preset
    }

    pub fn preview_data_uri(&self) -> Option<String> {
        self.cover.as_ref().map(CoverImage::preview_data_uri)
    }
}
