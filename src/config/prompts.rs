//! Prompt templates for Recap.
//!
//! The summary prompt can be customized by placing a `summary.toml` file in
//! the custom prompts directory.

use super::Settings;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub summary: SummaryPrompts,
}

/// Prompts for video summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    /// Instruction sent to the model. `{{transcript}}` is replaced with the
    /// video transcript.
    pub user: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            user: r#"Summarize the key points and main message from the content of this video, highlighting only the most important takeaways for the viewer. Organize the summary into clear sections with headings. Ensure the summary is engaging, concise, and informative. Keep the summary between 200 and 300 words, written in a way that makes it easy for someone to quickly grasp the core ideas without watching the entire video:

{{transcript}}

Structure the summary with sections like:
- Introduction (overview of the video's main theme)
- Key Insights (highlight important points)
- Actionable Advice (practical takeaways)
- Conclusion (final thoughts or call to action)"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts, overriding defaults from the custom directory if given.
    pub fn load(custom_dir: Option<&str>) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(dir) = custom_dir {
            let custom_path = Settings::expand_path(dir);

            let summary_path = custom_path.join("summary.toml");
            if summary_path.exists() {
                let content = std::fs::read_to_string(&summary_path)?;
                prompts.summary = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Build the summary instruction for a transcript.
    pub fn summary_prompt(&self, transcript: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());
        Self::render(&self.summary.user, &vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_names_sections() {
        let prompts = Prompts::default();
        for section in ["Introduction", "Key Insights", "Actionable Advice", "Conclusion"] {
            assert!(prompts.summary.user.contains(section), "missing {section}");
        }
        assert!(prompts.summary.user.contains("between 200 and 300 words"));
    }

    #[test]
    fn test_render_template() {
        let template = "Hello {{name}}, you have {{count}} messages.";
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("count".to_string(), "5".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Hello Alice, you have 5 messages.");
    }

    #[test]
    fn test_summary_prompt_embeds_transcript() {
        let prompt = Prompts::default().summary_prompt("we talk about rust");
        assert!(prompt.contains("video:\n\nwe talk about rust\n\nStructure"));
        assert!(!prompt.contains("{{transcript}}"));
    }

    #[test]
    fn test_load_custom_summary_prompt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("summary.toml"),
            "user = \"TL;DR please: {{transcript}}\"\n",
        )
        .unwrap();

        let prompts = Prompts::load(dir.path().to_str()).unwrap();
        assert_eq!(prompts.summary_prompt("abc"), "TL;DR please: abc");
    }

    #[test]
    fn test_load_without_custom_dir() {
        let prompts = Prompts::load(None).unwrap();
        assert_eq!(prompts.summary.user, SummaryPrompts::default().user);
    }
}
