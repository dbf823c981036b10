use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// A credential counts only when it has non-whitespace content.
pub fn is_usable_key(key: Option<&str>) -> bool {
    key.map_or(false, |key| !key.trim().is_empty())
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the credential from `GEMINI_API_KEY`, falling back to `API_KEY`.
    /// Blank values count as missing.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| env::var("API_KEY").ok())
            .filter(|key| is_usable_key(Some(key.as_str())));

        GeminiConfig {
            api_key,
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_credential(&self) -> bool {
        is_usable_key(self.api_key.as_deref())
    }

    /// Credential safe for logs: the first few characters, then the length.
    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => {
                let shown: String = key.chars().take(4).collect();
                format!("{}... ({} chars)", shown, key.chars().count())
            }
            _ => "<not set>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::new();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.has_credential());
        assert_eq!(config.masked_api_key(), "<not set>");
    }

    #[test]
    fn test_builder_methods() {
        let config = GeminiConfig::new()
            .with_api_key("abcdefgh")
            .with_model("gemini-3-pro-image-preview")
            .with_endpoint("http://localhost:8080/v1beta/");

        assert!(config.has_credential());
        assert_eq!(config.model, "gemini-3-pro-image-preview");
        assert_eq!(config.endpoint, "http://localhost:8080/v1beta");
        assert_eq!(config.masked_api_key(), "abcd... (8 chars)");
    }

    #[test]
    fn test_blank_key_is_not_a_credential() {
        let config = GeminiConfig::new().with_api_key("   ");
        assert!(!config.has_credential());
    }

    #[test]
    fn test_usable_key() {
        assert!(is_usable_key(Some("abc")));
        assert!(!is_usable_key(Some(" \t")));
        assert!(!is_usable_key(Some("")));
        assert!(!is_usable_key(None));
    }
}
