use crate::{
    error::{Result, StyleError},
    gemini::{prompt::AUTO_MODE_PROMPT, StyleRequestAdapter},
    models::{DesignMode, ImagePayload},
};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Shown when a failure carries no message of its own.
pub const LOCALIZED_FAILURE_MESSAGE: &str = "生成失败，请重试";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    Succeeded(ImagePayload),
    Failed(StyleError),
}

impl GenerationState {
    pub fn image(&self) -> Option<&ImagePayload> {
        match self {
            GenerationState::Succeeded(image) => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&StyleError> {
        match self {
            GenerationState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Text to show for a failure, with the localized fallback for blank messages.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| {
            let message = e.to_string();
            if message.trim().is_empty() {
                LOCALIZED_FAILURE_MESSAGE.to_string()
            } else {
                message
            }
        })
    }
}

/// Inputs and outcome of one user's styling workflow.
///
/// `generate` borrows the session mutably for the whole call, so a session
/// never has two requests in flight.
pub struct StyleSession {
    adapter: StyleRequestAdapter,
    user_photo: Option<ImagePayload>,
    reference_photo: Option<ImagePayload>,
    prompt: String,
    mode: DesignMode,
    state: GenerationState,
}

impl StyleSession {
    pub fn new(adapter: StyleRequestAdapter) -> Self {
        Self {
            adapter,
            user_photo: None,
            reference_photo: None,
            prompt: String::new(),
            mode: DesignMode::Auto,
            state: GenerationState::Idle,
        }
    }

    pub fn set_user_photo(&mut self, photo: Option<ImagePayload>) {
        self.user_photo = photo.filter(|p| !p.is_empty());
    }

    pub fn set_reference_photo(&mut self, photo: Option<ImagePayload>) {
        self.reference_photo = photo.filter(|p| !p.is_empty());
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_mode(&mut self, mode: DesignMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> DesignMode {
        self.mode
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn can_generate(&self) -> bool {
        self.user_photo.is_some() && self.state != GenerationState::Generating
    }

    /// Instruction handed to the adapter for the current mode.
    pub fn effective_prompt(&self) -> &str {
        match self.mode {
            DesignMode::Auto => AUTO_MODE_PROMPT,
            DesignMode::Custom => &self.prompt,
        }
    }

    /// Runs one generation with the current inputs. Does nothing without a user photo.
    pub async fn generate(&mut self) -> &GenerationState {
        let Some(user_photo) = self.user_photo.clone() else {
            log::debug!("Generate requested without a user photo, ignoring");
            return &self.state;
        };

        self.state = GenerationState::Generating;
        log::info!("Starting {} generation", self.mode);

        let prompt = self.effective_prompt().to_string();
        let result = self
            .adapter
            .generate(&user_photo, &prompt, self.reference_photo.as_ref())
            .await;

        self.state = match result {
            Ok(image) => GenerationState::Succeeded(image),
            Err(e) => GenerationState::Failed(e),
        };
        &self.state
    }

    /// Re-runs the whole call from scratch with the same inputs.
    pub async fn retry(&mut self) -> &GenerationState {
        self.generate().await
    }

    pub fn reset(&mut self) {
        self.state = GenerationState::Idle;
    }

    pub fn download_filename(&self) -> String {
        download_filename_at(Utc::now())
    }

    /// Decodes the current result and writes it under `dir`. Returns the written path,
    /// or `None` when there is no result to save.
    pub fn save_result(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(image) = self.state.image() else {
            return Ok(None);
        };

        let bytes = image.decode_bytes()?;
        std::fs::create_dir_all(dir).map_err(|e| StyleError::io(dir, e))?;
        let path = dir.join(self.download_filename());
        std::fs::write(&path, bytes).map_err(|e| StyleError::io(&path, e))?;
        log::info!("Saved generated image to {}", path.display());
        Ok(Some(path))
    }
}

pub fn download_filename_at(now: DateTime<Utc>) -> String {
    format!("ai-hairstyle-{}.png", now.timestamp_millis())
}
