//! Transcript summarization through a generative language model.

mod gemini;

pub use gemini::GeminiModel;

use crate::config::Prompts;
use crate::error::Result;
use async_trait::async_trait;
use tracing::{error, info, instrument};

/// Text returned in place of a summary when the model call fails.
pub const SUMMARY_FAILED: &str = "Error summarizing the text";

/// Trait for text generation backends.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Name of the underlying model.
    fn model(&self) -> &str;
}

/// Summarize a transcript.
///
/// Returns the model output verbatim, or [`SUMMARY_FAILED`] if the model
/// call fails. The failure is logged, not propagated.
#[instrument(skip_all, fields(model = model.model(), chars = transcript.len()))]
pub async fn summarize(model: &dyn LanguageModel, prompts: &Prompts, transcript: &str) -> String {
    let prompt = prompts.summary_prompt(transcript);

    match model.generate(&prompt).await {
        Ok(summary) => {
            info!("Generated summary ({} chars)", summary.len());
            summary
        }
        Err(e) => {
            error!("Error summarizing the text with {}: {}", model.model(), e);
            SUMMARY_FAILED.to_string()
        }
    }
}
