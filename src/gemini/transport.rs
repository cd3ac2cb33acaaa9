use crate::{
    error::{Result, StyleError},
    models::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;
use reqwest::Client;

/// Sends one `generateContent` call. The adapter talks to the model only through this.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &str,
        model_id: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn endpoint(&self, model_id: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model_id
        )
    }
}

#[async_trait]
impl ContentGenerator for HttpTransport {
    async fn generate_content(
        &self,
        api_key: &str,
        model_id: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model_id);
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| StyleError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StyleError::transport(e.to_string()))?;

        if !status.is_success() {
            log::warn!("Gemini returned HTTP {}", status);
            return Err(StyleError::transport(error_message(status, &body)));
        }

        serde_json::from_str(&body)
            .map_err(|e| StyleError::transport(format!("Malformed response from Gemini: {}", e)))
    }
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = parsed.error.message.filter(|m| !m.trim().is_empty()) {
            return message;
        }
        if let Some(status_name) = parsed.error.status {
            return format!("HTTP {}: {}", status.as_u16(), status_name);
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_endpoint() {
        let transport = HttpTransport::new("https://generativelanguage.googleapis.com/");
        assert_eq!(
            transport.endpoint("gemini-2.5-flash-image"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "API key not valid."
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        let body = r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            error_message(StatusCode::TOO_MANY_REQUESTS, body),
            "HTTP 429: RESOURCE_EXHAUSTED"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "HTTP 502 Bad Gateway: upstream down"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "HTTP 500 Internal Server Error"
        );
    }
}
