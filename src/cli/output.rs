//! Terminal output for the `recap` commands.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn marker(self) -> StyledObject<&'static str> {
        let marker = style(">>").bold();
        match self {
            Level::Info => marker.cyan(),
            Level::Success => marker.green(),
            Level::Warning => marker.yellow(),
            Level::Error => marker.red(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    fn status(level: Level, msg: &str) {
        let line = format!("{} {}", level.marker(), msg);
        if level.to_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn info(msg: &str) {
        Self::status(Level::Info, msg);
    }

    pub fn success(msg: &str) {
        Self::status(Level::Success, msg);
    }

    pub fn warning(msg: &str) {
        Self::status(Level::Warning, msg);
    }

    pub fn error(msg: &str) {
        Self::status(Level::Error, msg);
    }

    /// Print an underlined section title.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print one route of the HTTP API.
    pub fn endpoint(method: &str, path: &str, what: &str) {
        println!("  {}", endpoint_line(method, path, style(what).dim().to_string()));
    }

    /// Print a finished video summary.
    pub fn summary(video_id: &str, text: &str) {
        Self::header(&format!("Summary of https://youtu.be/{}", video_id));
        println!("\n{}", text.trim_end());
    }

    /// Spinner shown while the pipeline is waiting on YouTube and Gemini.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

fn endpoint_line(method: &str, path: &str, what: String) -> String {
    format!("{:<5}{:<12}{}", method, path, what)
}
