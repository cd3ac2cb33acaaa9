pub mod prompt;
pub mod style_adapter;
pub mod transport;

use crate::{config::GeminiConfig, error::Result, session::StyleSession};
use std::sync::Arc;

pub use style_adapter::StyleRequestAdapter;
pub use transport::{ContentGenerator, HttpTransport};

#[derive(Clone)]
pub struct GeminiClient {
    style_adapter: StyleRequestAdapter,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let transport: Arc<dyn ContentGenerator> = Arc::new(HttpTransport::new(config.base_url()));
        Ok(Self::with_transport(config, transport))
    }

    /// Builds a client over a caller-supplied transport.
    pub fn with_transport(config: GeminiConfig, transport: Arc<dyn ContentGenerator>) -> Self {
        match config.api_key() {
            Some(key) => log::debug!("Gemini API key configured ({} chars)", key.len()),
            None => log::warn!("No Gemini API key configured, generation calls will fail"),
        }

        let style_adapter =
            StyleRequestAdapter::new(transport, config.api_key().map(String::from))
                .with_model(config.model_id());

        Self { style_adapter }
    }

    pub fn hairstyle(&self) -> &StyleRequestAdapter {
        &self.style_adapter
    }

    /// A fresh, empty session driving this client's adapter.
    pub fn session(&self) -> StyleSession {
        StyleSession::new(self.style_adapter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::style_adapter::tests::{png_response, MockGenerator};
    use crate::models::ImagePayload;

    #[tokio::test]
    async fn test_client_passes_config_to_adapter() {
        let mock = MockGenerator::responding(png_response());
        let config = GeminiConfig::new()
            .with_api_key("secret")
            .with_model("gemini-test-model");
        let client = GeminiClient::with_transport(config, mock.clone());

        assert_eq!(client.hairstyle().model_id(), "gemini-test-model");
        let photo = ImagePayload::new("data:image/png;base64,AAAA");
        client.hairstyle().generate(&photo, "", None).await.unwrap();

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls[0].0, "secret");
        assert_eq!(calls[0].1, "gemini-test-model");
    }
}
