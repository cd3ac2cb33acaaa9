use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash-image";

/// Environment variables checked for the API key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["VITE_API_KEY", "API_KEY"];

/// The variable we point operators at when no key is found.
pub const API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: Option<GeminiConfig>,
    pub output_dir: Option<PathBuf>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            base_url: None,
            model_id: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.trim().is_empty());
        let base_url = env::var("GEMINI_BASE_URL").ok();
        let model_id = env::var("GEMINI_MODEL").ok();

        GeminiConfig {
            api_key,
            base_url,
            model_id,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn model_id(&self) -> &str {
        self.model_id.as_deref().unwrap_or(DEFAULT_MODEL_ID)
    }

    /// The configured key, if it is non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini: None,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var("RESTYLE_OUTPUT_DIR").ok().map(PathBuf::from);

        Config {
            gemini: Some(GeminiConfig::from_env()),
            output_dir,
        }
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = Some(config);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::new();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model_id(), DEFAULT_MODEL_ID);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = GeminiConfig::new().with_api_key("  ");
        assert!(config.api_key().is_none());

        let config = GeminiConfig::new().with_api_key("abc123");
        assert_eq!(config.api_key(), Some("abc123"));
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_gemini(
                GeminiConfig::new()
                    .with_base_url("http://localhost:9999")
                    .with_model("gemini-test"),
            )
            .with_output_dir("/tmp/out");

        let gemini = config.gemini.as_ref().unwrap();
        assert_eq!(gemini.base_url(), "http://localhost:9999");
        assert_eq!(gemini.model_id(), "gemini-test");
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/out"));
        assert_eq!(Config::new().output_dir(), PathBuf::from("."));
    }
}
