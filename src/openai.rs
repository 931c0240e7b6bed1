//! OpenAI-compatible client configuration.
//!
//! Gemini exposes an OpenAI-compatible chat-completions endpoint, so the
//! `async-openai` client is pointed at it with the Gemini API key.

use crate::config::GeminiSettings;
use crate::error::Result;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create a client for an OpenAI-compatible endpoint with a request timeout.
pub fn create_client(api_key: &str, api_base: &str, timeout: Duration) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder().timeout(timeout).build()?;

    let config = OpenAIConfig::new()
        .with_api_key(api_key)
        .with_api_base(api_base.trim_end_matches('/'));

    Ok(Client::with_config(config).with_http_client(http_client))
}

/// Create a client for the configured Gemini endpoint.
pub fn create_gemini_client(settings: &GeminiSettings, api_key: &str) -> Result<Client<OpenAIConfig>> {
    create_client(
        api_key,
        &settings.api_base,
        Duration::from_secs(settings.timeout_secs),
    )
}
