use crate::{encoding, error::Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_AD_MIME_TYPE: &str = "image/png";

/// A generated advertisement image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAd {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl GeneratedAd {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn data_uri(&self) -> String {
        encoding::data_uri(&self.mime_type, &self.bytes)
    }

    /// Suggested download name: the title lower-cased with each run of
    /// whitespace replaced by a hyphen. Characters that cannot appear in a
    /// file name become hyphens and leading dots are stripped, so the name
    /// always stays inside the target directory.
    pub fn download_filename(title: &str) -> String {
        let stem = title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        let stem: String = stem
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect();
        let stem = stem.trim_start_matches('.');
        let stem = if stem.is_empty() { "ad" } else { stem };
        format!("{}.png", stem)
    }

    pub async fn save(&self, dir: &Path, title: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(Self::download_filename(title));
        tokio::fs::write(&path, &self.bytes).await?;
        log::info!("Saved ad image ({} bytes) to {}", self.bytes.len(), path.display());
        Ok(path)
    }
}
