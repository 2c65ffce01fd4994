//! Run configuration: command-line flags and the API credential.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No OPENAI_API_KEY found in the environment or .env")]
    MissingApiKey,
}

/// Generate speech audio for every item of a monthly lesson plan.
#[derive(Debug, Clone, Parser)]
#[command(name = "lesson-tts", version, about)]
pub struct GenerateConfig {
    /// Lesson plan JSON document
    #[arg(long, default_value = "./content/january.json")]
    pub content: PathBuf,

    /// Root directory for generated audio
    #[arg(long, default_value = "./output")]
    pub output: PathBuf,

    /// Pause after each generated item, in milliseconds
    #[arg(long, default_value_t = 8000)]
    pub pause_ms: u64,

    /// Speech model
    #[arg(long, default_value = "gpt-4o-mini-tts")]
    pub model: String,

    /// Voice used for every item
    #[arg(long, default_value = "sage")]
    pub voice: String,

    /// Delivery instructions passed to the model
    #[arg(long)]
    pub instructions: Option<String>,

    /// API base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub base_url: String,
}

impl GenerateConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Read the API credential from the process environment.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_from(std::env::var(API_KEY_VAR).ok())
}

/// Validate a raw credential value; blank values count as missing.
pub fn api_key_from(value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_missing() {
        assert_eq!(api_key_from(None), Err(ConfigError::MissingApiKey));
        assert_eq!(
            api_key_from(Some("  ".into())),
            Err(ConfigError::MissingApiKey)
        );
        assert_eq!(api_key_from(Some("sk-abc\n".into())).unwrap(), "sk-abc");
    }

    #[test]
    fn defaults_match_monthly_run() {
        let config = GenerateConfig::try_parse_from(["lesson-tts"]).unwrap();
        assert_eq!(config.content, PathBuf::from("./content/january.json"));
        assert_eq!(config.output, PathBuf::from("./output"));
        assert_eq!(config.pause(), Duration::from_secs(8));
        assert_eq!(config.voice, "sage");
        assert_eq!(config.model, "gpt-4o-mini-tts");
    }

    #[test]
    fn flags_override_defaults() {
        let config = GenerateConfig::try_parse_from([
            "lesson-tts",
            "--content",
            "content/february.json",
            "--pause-ms",
            "250",
            "--voice",
            "nova",
        ])
        .unwrap();
        assert_eq!(config.content, PathBuf::from("content/february.json"));
        assert_eq!(config.pause(), Duration::from_millis(250));
        assert_eq!(config.voice, "nova");
    }
}
