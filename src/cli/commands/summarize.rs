//! Summarize command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(url: &str, json: bool, settings: Settings) -> Result<()> {
    let orchestrator = match Orchestrator::new(&settings) {
        Ok(o) => o,
        Err(e) => {
            Output::error(&e.to_string());
            Output::info("Run 'recap doctor' for detailed diagnostics.");
            return Err(e.into());
        }
    };

    let spinner = Output::spinner("Fetching transcript and summarizing...");
    let result = orchestrator.summarize_url(url).await;
    spinner.finish_and_clear();

    let summary = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        Output::summary(&summary.video_id, &summary.summary);
    }

    Ok(())
}
