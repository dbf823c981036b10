/// Message shown when the image service fails without explaining why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate the ad image. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("API key is not configured. Set GEMINI_API_KEY and try again.")]
    MissingCredential,

    #[error("No image was generated{}", detail_suffix(.detail))]
    NoImageReturned { detail: Option<String> },

    #[error("{0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {}", d),
        None => String::new(),
    }
}

impl From<reqwest::Error> for AdError {
    fn from(e: reqwest::Error) -> Self {
        AdError::Transport(e.to_string())
    }
}

impl From<std::io::Error> for AdError {
    fn from(e: std::io::Error) -> Self {
        AdError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdError>;
