//! Deterministic stand-in for the hosted model, for tests.

use std::sync::Mutex;

use axum::async_trait;

use super::{AiClient, AiError};

#[derive(Debug, Default)]
pub struct FakeAi {
    reply: Option<String>,
    fail_with: Option<String>,
    prompts: Mutex<Vec<String>>,
    images: Mutex<Vec<(String, Vec<u8>)>>,
}

impl FakeAi {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn images(&self) -> Vec<(String, Vec<u8>)> {
        self.images.lock().unwrap().clone()
    }

    fn respond(&self, prompt: &str) -> Result<String, AiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(message) = &self.fail_with {
            return Err(AiError::Request(message.clone()));
        }
        Ok(self.reply.clone().unwrap_or_default())
    }
}

#[async_trait]
impl AiClient for FakeAi {
    async fn generate_text(&self, prompt: &str) -> Result<String, AiError> {
        self.respond(prompt)
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image: &[u8],
    ) -> Result<String, AiError> {
        self.images
            .lock()
            .unwrap()
            .push((mime_type.to_string(), image.to_vec()));
        self.respond(prompt)
    }
}
