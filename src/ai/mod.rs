//! Hosted generative-model collaborator used for recipe extraction and chat.

#[cfg(test)]
pub(crate) mod fake;
mod gemini;

pub use gemini::GeminiClient;

use axum::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI request failed: {0}")]
    Request(String),

    #[error("AI service returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse AI response: {0}")]
    Parse(String),

    #[error("AI service returned no content")]
    EmptyResponse,
}

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Generate text from a prompt alone.
    async fn generate_text(&self, prompt: &str) -> Result<String, AiError>;

    /// Generate text from a prompt plus one inline image.
    async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image: &[u8],
    ) -> Result<String, AiError>;
}
