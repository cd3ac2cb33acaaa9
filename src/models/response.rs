use serde::{Deserialize, Serialize};

use super::image::ImagePayload;
use super::request::Content;

/// Used when the service returns image data without saying what it is.
pub const DEFAULT_RESULT_MIME_TYPE: &str = "image/png";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// First inline image with non-empty data in the first candidate, as a data URI.
    pub fn first_image(&self) -> Option<ImagePayload> {
        let candidate = self.candidates.as_ref()?.first()?;
        let parts = candidate.content.as_ref()?.parts.as_ref()?;

        parts.iter().find_map(|part| {
            let inline = part.inline_data.as_ref().filter(|i| !i.data.is_empty())?;
            let mime_type = inline
                .mime_type
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_RESULT_MIME_TYPE);
            Some(ImagePayload::from_base64(mime_type, &inline.data))
        })
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .finish_reason
            .as_deref()
    }

    /// Any text the model returned alongside (or instead of) an image.
    pub fn text(&self) -> Option<String> {
        let parts = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?;
        let text: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text.join("\n"))
        }
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
