use crate::{
    config::{API_KEY_VAR, DEFAULT_MODEL_ID},
    error::{Result, StyleError},
    gemini::{
        prompt::{compose_instruction, REFERENCE_STEERING_TEXT},
        transport::ContentGenerator,
    },
    logger,
    models::{GenerationRequest, ImagePayload, ModelCategory, ModelInfo},
};
use std::sync::Arc;

/// Turns a photo, an optional reference photo and an optional description
/// into a single image-edit call.
///
/// Each call is one attempt: no retries, no timeout of its own, no progress
/// reporting. Callers that need a single request in flight must enforce it.
#[derive(Clone)]
pub struct StyleRequestAdapter {
    transport: Arc<dyn ContentGenerator>,
    api_key: Option<String>,
    model_id: String,
}

impl StyleRequestAdapter {
    pub fn new(transport: Arc<dyn ContentGenerator>, api_key: Option<String>) -> Self {
        Self {
            transport,
            api_key,
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn supported_models() -> Vec<ModelInfo> {
        vec![ModelInfo {
            id: DEFAULT_MODEL_ID.to_string(),
            name: "Gemini 2.5 Flash Image".to_string(),
            provider: "Google".to_string(),
            category: ModelCategory::ImageEdit,
            description: "Conversational image generation and editing".to_string(),
        }]
    }

    /// Parts in model order: user photo, then reference photo with its
    /// steering text, then the composed instruction.
    pub fn build_request(
        user_photo: &ImagePayload,
        instruction: &str,
        reference_photo: Option<&ImagePayload>,
    ) -> GenerationRequest {
        let mut request = GenerationRequest::new().with_image(user_photo.clone());

        if let Some(reference) = reference_photo {
            request = request
                .with_image(reference.clone())
                .with_text(REFERENCE_STEERING_TEXT);
        }

        request.with_text(compose_instruction(instruction, reference_photo.is_some()))
    }

    pub async fn generate(
        &self,
        user_photo: &ImagePayload,
        instruction: &str,
        reference_photo: Option<&ImagePayload>,
    ) -> Result<ImagePayload> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                log::error!("No API key configured, refusing to call {}", self.model_id);
                StyleError::missing_api_key(API_KEY_VAR)
            })?;

        let request = Self::build_request(user_photo, instruction, reference_photo);
        log::info!(
            "Generating hairstyle with model: {} ({} parts, reference: {})",
            self.model_id,
            request.len(),
            reference_photo.is_some()
        );
        log::debug!(
            "User photo: {} ({} base64 chars)",
            user_photo.mime_type(),
            user_photo.base64_payload().len()
        );

        let _timer = logger::timer("hairstyle generation");
        let response = self
            .transport
            .generate_content(api_key, &self.model_id, &request.to_wire())
            .await
            .map_err(|e| {
                log::error!("Gemini API error: {}", e);
                e
            })?;

        match response.first_image() {
            Some(image) => {
                log::info!("Received {} image from {}", image.mime_type(), self.model_id);
                Ok(image)
            }
            None => {
                log::warn!(
                    "No image in response (finish reason: {}, text: {})",
                    response.finish_reason().unwrap_or("unknown"),
                    response.text().unwrap_or_default()
                );
                Err(StyleError::EmptyResult)
            }
        }
    }
}
