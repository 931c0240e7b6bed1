//! Error types for Recap.

use thiserror::Error;

/// Library-level error type for Recap operations.
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YouTube URL is required")]
    MissingUrl,

    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Transcript not available for this video")]
    TranscriptUnavailable,

    #[error("Caption provider error: {0}")]
    Captions(String),

    #[error("No transcript found for video {video_id} in languages {languages:?}")]
    NoTranscript {
        video_id: String,
        languages: Vec<String>,
    },

    #[error("Language model error: {0}")]
    LanguageModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Recap operations.
pub type Result<T> = std::result::Result<T, RecapError>;
