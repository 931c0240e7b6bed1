//! Pipeline orchestrator for Recap.
//!
//! Coordinates the three steps of a summary request: video ID extraction,
//! transcript retrieval and summarization.

use crate::config::{Prompts, Settings};
use crate::error::{RecapError, Result};
use crate::summarizer::{summarize, GeminiModel, LanguageModel};
use crate::youtube::{extract_video_id, fetch_transcript, TranscriptProvider, YoutubeCaptions};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Result of summarizing one video.
#[derive(Debug, Clone, Serialize)]
pub struct VideoSummary {
    pub video_id: String,
    pub summary: String,
}

/// The main orchestrator for the Recap pipeline.
pub struct Orchestrator {
    prompts: Prompts,
    transcripts: Arc<dyn TranscriptProvider>,
    model: Arc<dyn LanguageModel>,
}

impl Orchestrator {
    /// Create an orchestrator backed by YouTube captions and Gemini.
    ///
    /// Fails if the Gemini API key is not configured.
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings.gemini_api_key()?;
        let prompts = Prompts::load(settings.prompts.custom_dir.as_deref())?;

        let transcripts: Arc<dyn TranscriptProvider> =
            Arc::new(YoutubeCaptions::from_settings(&settings.youtube)?);
        let model: Arc<dyn LanguageModel> = Arc::new(GeminiModel::new(&settings.gemini, &api_key)?);

        info!(
            "Using {} with captions in {:?}",
            settings.gemini.model, settings.youtube.languages
        );

        Ok(Self::with_components(prompts, transcripts, model))
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        prompts: Prompts,
        transcripts: Arc<dyn TranscriptProvider>,
        model: Arc<dyn LanguageModel>,
    ) -> Self {
        Self {
            prompts,
            transcripts,
            model,
        }
    }

    /// Summarize the video behind a URL.
    ///
    /// A failed model call still yields a summary (the failure text); only a
    /// bad URL or a missing transcript is an error.
    #[instrument(skip(self))]
    pub async fn summarize_url(&self, url: &str) -> Result<VideoSummary> {
        let video_id = extract_video_id(url).ok_or(RecapError::InvalidUrl)?;

        let transcript = fetch_transcript(self.transcripts.as_ref(), &video_id)
            .await
            .ok_or(RecapError::TranscriptUnavailable)?;

        let summary = summarize(self.model.as_ref(), &self.prompts, &transcript).await;

        info!("Summarized video {}", video_id);
        Ok(VideoSummary { video_id, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::SUMMARY_FAILED;
    use crate::youtube::CaptionFragment;
    use async_trait::async_trait;

    struct Captions;

    #[async_trait]
    impl TranscriptProvider for Captions {
        async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionFragment>> {
            match video_id {
                "dQw4w9WgXcQ" => Ok(vec![
                    CaptionFragment::new("never gonna", 0.0, 1.0),
                    CaptionFragment::new("give you up", 1.0, 1.0),
                ]),
                _ => Err(RecapError::Captions("video unavailable".to_string())),
            }
        }
    }

    struct Echo;

    #[async_trait]
    impl LanguageModel for Echo {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("summary of {} chars", prompt.len()))
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    struct Broken;

    #[async_trait]
    impl LanguageModel for Broken {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(RecapError::LanguageModel("content blocked".to_string()))
        }

        fn model(&self) -> &str {
            "broken"
        }
    }

    fn orchestrator(model: Arc<dyn LanguageModel>) -> Orchestrator {
        Orchestrator::with_components(Prompts::default(), Arc::new(Captions), model)
    }

    #[tokio::test]
    async fn test_summarize_url() {
        let result = orchestrator(Arc::new(Echo))
            .summarize_url("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(result.video_id, "dQw4w9WgXcQ");
        assert!(result.summary.starts_with("summary of "));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = orchestrator(Arc::new(Echo))
            .summarize_url("not a url")
            .await
            .unwrap_err();
        assert!(matches!(err, RecapError::InvalidUrl));
    }

    #[tokio::test]
    async fn test_transcript_unavailable() {
        let err = orchestrator(Arc::new(Echo))
            .summarize_url("https://www.youtube.com/watch?v=AAAAAAAAAAA")
            .await
            .unwrap_err();
        assert!(matches!(err, RecapError::TranscriptUnavailable));
    }

    #[tokio::test]
    async fn test_model_failure_is_not_an_error() {
        let result = orchestrator(Arc::new(Broken))
            .summarize_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();
        assert_eq!(result.summary, SUMMARY_FAILED);
    }
}
