//! Gemini language model via the OpenAI-compatible endpoint.

use super::LanguageModel;
use crate::config::GeminiSettings;
use crate::error::{RecapError, Result};
use crate::openai::create_gemini_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Gemini-backed language model.
pub struct GeminiModel {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiModel {
    /// Create a model from configuration and an API key.
    pub fn new(settings: &GeminiSettings, api_key: &str) -> Result<Self> {
        Ok(Self {
            client: create_gemini_client(settings, api_key)?,
            model: settings.model.clone(),
        })
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| RecapError::LanguageModel(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| RecapError::LanguageModel(e.to_string()))?;

        debug!("Requesting completion ({} prompt chars)", prompt.len());

        let response = self.client.chat().create(request).await.map_err(|e| {
            RecapError::LanguageModel(format!("Failed to generate content: {}", e))
        })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| RecapError::LanguageModel("Empty response from model".to_string()))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let mut settings = GeminiSettings::default();
        settings.model = "gemini-2.0-flash".to_string();

        let model = GeminiModel::new(&settings, "test-key").unwrap();
        assert_eq!(model.model(), "gemini-2.0-flash");
    }
}
