//! Doctor command - verify configuration before serving.

use crate::cli::Output;
use crate::config::{Prompts, Settings};
use console::style;
use std::path::Path;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(config_path: &Path, settings: &Settings) -> anyhow::Result<()> {
    Output::header("Recap Doctor");
    println!();

    let checks = vec![
        check_api_key(&settings.gemini.api_key_env, std::env::var(&settings.gemini.api_key_env).ok()),
        check_config_file(config_path),
        check_prompts(settings),
        check_languages(&settings.youtube.languages),
    ];

    for check in &checks {
        check.print();
    }
    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before starting the server.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Recap is ready to serve.");
    }

    Ok(())
}

/// Check that the Gemini API key is present.
fn check_api_key(var: &str, value: Option<String>) -> CheckResult {
    match value {
        Some(key) if key.trim().is_empty() => {
            CheckResult::error(var, "empty", &format!("Set with: export {}='...'", var))
        }
        Some(key) if key.chars().count() > 12 => {
            CheckResult::ok(var, &format!("configured ({})", mask_key(&key)))
        }
        Some(_) => CheckResult::warning(
            var,
            "set but looks too short",
            "Gemini API keys are usually 39 characters long",
        ),
        None => CheckResult::error(var, "not set", &format!("Set with: export {}='...'", var)),
    }
}

/// Keep the first and last four characters of a key.
fn mask_key(key: &str) -> String {
    let head: String = key.chars().take(4).collect();
    let tail: String = key.chars().skip(key.chars().count().saturating_sub(4)).collect();
    format!("{}...{}", head, tail)
}

fn check_config_file(path: &Path) -> CheckResult {
    if path.exists() {
        CheckResult::ok("Config file", &format!("{}", path.display()))
    } else {
        CheckResult::warning("Config file", "using defaults", "Create with: recap config init")
    }
}

fn check_prompts(settings: &Settings) -> CheckResult {
    match Prompts::load(settings.prompts.custom_dir.as_deref()) {
        Ok(prompts) if prompts.summary.user.contains("{{transcript}}") => {
            let source = settings.prompts.custom_dir.as_deref().unwrap_or("built-in");
            CheckResult::ok("Summary prompt", source)
        }
        Ok(_) => CheckResult::warning(
            "Summary prompt",
            "has no {{transcript}} placeholder",
            "The transcript will not be sent to the model",
        ),
        Err(e) => CheckResult::error(
            "Summary prompt",
            &e.to_string(),
            "Check summary.toml in the custom prompts directory",
        ),
    }
}

fn check_languages(languages: &[String]) -> CheckResult {
    if languages.is_empty() {
        CheckResult::error(
            "Caption languages",
            "none configured",
            "Set youtube.languages, e.g. [\"en\"]",
        )
    } else {
        CheckResult::ok("Caption languages", &languages.join(", "))
    }
}
