//! Recap - YouTube video summaries
//!
//! Turns a YouTube URL into a structured summary: the video's captions are
//! fetched, joined into a transcript, and handed to Gemini with a fixed
//! summary prompt.
//!
//! # Architecture
//!
//! - `youtube` - Video ID extraction and caption retrieval
//! - `summarizer` - Prompting the language model
//! - `orchestrator` - The URL → transcript → summary pipeline
//! - `server` - The `POST /summarize` HTTP API
//! - `config` - Settings and prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use recap::config::Settings;
//! use recap::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(&settings)?;
//!
//!     let result = orchestrator
//!         .summarize_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .await?;
//!     println!("{}", result.summary);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod server;
pub mod summarizer;
pub mod youtube;

pub use error::{RecapError, Result};
