use serde::{Deserialize, Serialize};

use super::image::ImagePayload;

/// One unit of a multi-part generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPart {
    Image(ImagePayload),
    Text(String),
}

impl RequestPart {
    pub fn is_image(&self) -> bool {
        matches!(self, RequestPart::Image(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestPart::Text(text) => Some(text),
            RequestPart::Image(_) => None,
        }
    }
}

/// Ordered parts sent to the model. The first image is the one being edited,
/// later images are style references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub parts: Vec<RequestPart>,
}

impl GenerationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, image: ImagePayload) -> Self {
        self.parts.push(RequestPart::Image(image));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(RequestPart::Text(text.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The last text part, which carries the composed instruction.
    pub fn instruction(&self) -> Option<&str> {
        self.parts.iter().rev().find_map(RequestPart::as_text)
    }

    pub fn to_wire(&self) -> GenerateContentRequest {
        let parts = self
            .parts
            .iter()
            .map(|part| match part {
                RequestPart::Image(image) => WirePart {
                    text: None,
                    inline_data: Some(InlineData {
                        mime_type: Some(image.mime_type().to_string()),
                        data: image.base64_payload().to_string(),
                    }),
                },
                RequestPart::Text(text) => WirePart {
                    text: Some(text.clone()),
                    inline_data: None,
                },
            })
            .collect();

        GenerateContentRequest {
            contents: vec![Content { parts: Some(parts) }],
        }
    }
}

// Gemini `generateContent` wire format.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<WirePart>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, alias = "inline_data", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, alias = "mime_type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}
