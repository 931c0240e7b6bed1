//! YouTube video identifiers and caption transcripts.
//!
//! Provides URL parsing plus a trait-based interface for caption providers.

mod captions;

pub use captions::YoutubeCaptions;

use crate::error::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

static VIDEO_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?:https?://)?
        (?:www\.)?
        (?:youtube\.com/watch\?v=|youtu\.be/)
        ([a-zA-Z0-9_-]{11})
    ",
    )
    .expect("Invalid regex")
});

/// Extract the 11-character video ID from a YouTube URL.
///
/// Accepts `youtube.com/watch?v=<id>` and `youtu.be/<id>`, with or without
/// scheme and `www.` prefix. Returns `None` when the input holds neither.
pub fn extract_video_id(input: &str) -> Option<String> {
    VIDEO_ID_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// A single timed caption snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionFragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Trait for caption track providers.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the caption fragments of a video, in playback order.
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionFragment>>;
}

/// Join caption fragments into a single transcript.
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetch the full transcript of a video.
///
/// Provider failures are logged and collapsed into `None`; callers only learn
/// that no transcript is available.
#[instrument(skip(provider))]
pub async fn fetch_transcript(provider: &dyn TranscriptProvider, video_id: &str) -> Option<String> {
    match provider.fetch_captions(video_id).await {
        Ok(fragments) => {
            let transcript = join_fragments(&fragments);
            if transcript.is_empty() {
                warn!("Transcript for video {} is empty", video_id);
                return None;
            }
            debug!(
                "Fetched {} caption fragments ({} chars)",
                fragments.len(),
                transcript.len()
            );
            Some(transcript)
        }
        Err(e) => {
            warn!("Error fetching transcript for video {}: {}", video_id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecapError;

    struct StaticProvider(Vec<CaptionFragment>);

    #[async_trait]
    impl TranscriptProvider for StaticProvider {
        async fn fetch_captions(&self, _video_id: &str) -> Result<Vec<CaptionFragment>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TranscriptProvider for FailingProvider {
        async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionFragment>> {
            Err(RecapError::Captions(format!("captions disabled for {}", video_id)))
        }
    }

    #[test]
    fn test_extract_video_id() {
        let id = Some("dQw4w9WgXcQ".to_string());

        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "http://youtu.be/dQw4w9WgXcQ",
            "https://www.youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url), id, "{url}");
        }
    }

    #[test]
    fn test_extract_video_id_ignores_trailing_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120s"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/a_b-C1d2E3f?si=xyz"),
            Some("a_b-C1d2E3f".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_no_match() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=dQw4w9"), None);
        assert_eq!(extract_video_id("https://vimeo.com/123456789012"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_join_fragments() {
        let fragments = vec![CaptionFragment::new("a", 0.0, 1.0), CaptionFragment::new("b", 1.0, 1.0)];
        assert_eq!(join_fragments(&fragments), "a b");
        assert_eq!(join_fragments(&[]), "");
    }

    #[tokio::test]
    async fn test_fetch_transcript_joins_in_order() {
        let provider = StaticProvider(vec![
            CaptionFragment::new("a", 0.0, 1.0),
            CaptionFragment::new("b", 1.0, 1.0),
        ]);
        assert_eq!(
            fetch_transcript(&provider, "dQw4w9WgXcQ").await,
            Some("a b".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_transcript_provider_failure() {
        assert_eq!(fetch_transcript(&FailingProvider, "bad").await, None);
    }

    #[tokio::test]
    async fn test_fetch_transcript_empty_is_unavailable() {
        let provider = StaticProvider(Vec::new());
        assert_eq!(fetch_transcript(&provider, "dQw4w9WgXcQ").await, None);
    }
}
