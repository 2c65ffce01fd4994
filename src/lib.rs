//! # lesson-tts
//!
//! A Rust library for batch-generating speech audio from monthly lesson plans.
//!
//! ## Features
//!
//! - **Lesson plans**: JSON documents of weeks, each with vocabulary, sentence and question items
//! - **Idempotent runs**: an item whose audio file already exists is never synthesized again
//! - **Paced requests**: a fixed pause after every generated item keeps the API call rate low
//! - **OpenAI TTS**: speech synthesis through the OpenAI audio API (`openai` feature)
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! lesson-tts = { version = "2026.10", features = ["openai"] }
//! ```
//!
//! ```ignore
//! use std::path::Path;
//! use std::time::Duration;
//! use lesson_tts::engines::openai::{OpenAiEngine, OpenAiParams};
//! use lesson_tts::{run_plan, ItemGenerator, LessonPlan, OutputLayout};
//!
//! let plan = LessonPlan::load(Path::new("content/january.json"))?;
//! let mut engine = OpenAiEngine::new("sk-...", OpenAiParams::default())?;
//! let mut generator = ItemGenerator::new(&mut engine, Duration::from_secs(8));
//!
//! let summary = run_plan(&plan, &OutputLayout::new("output"), &mut generator)?;
//! println!("{summary}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engines;
pub mod generator;
pub mod layout;
pub mod plan;

pub use generator::{run_plan, ItemGenerator, ItemOutcome, RunSummary};
pub use layout::{ensure_dir, OutputLayout};
pub use plan::{Category, Item, LessonPlan, PlanError, Week};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Encoded audio container formats a synthesis engine can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

impl AudioFormat {
    /// File extension (without the dot) used for artifacts of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Opus => "opus",
            AudioFormat::Aac => "aac",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
            AudioFormat::Pcm => "pcm",
        }
    }
}

/// The result of a synthesis (text-to-speech) operation.
///
/// Holds the encoded audio exactly as the engine returned it, ready to be
/// persisted without further processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// Container format of `audio`
    pub format: AudioFormat,
}

impl SynthesisResult {
    /// Write the audio to `path`.
    ///
    /// The bytes land in a `.part` sibling first and are renamed into place,
    /// so `path` only ever exists with complete contents.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let partial = partial_path(path);
        if let Err(e) = fs::write(&partial, &self.audio) {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }
        if let Err(e) = fs::rename(&partial, path) {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }
        Ok(())
    }

    /// Size of the encoded audio in bytes.
    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

/// Common interface for text-to-speech synthesis engines.
///
/// An engine is configured once (voice, model, output format) and then used
/// for every item of a run.
pub trait SynthesisEngine {
    /// Parameters for configuring a synthesis request (voice, model, etc.)
    type SynthesisParams;

    /// Synthesize speech from the given text.
    ///
    /// `None` uses the parameters the engine was configured with.
    fn synthesize(
        &mut self,
        text: &str,
        params: Option<Self::SynthesisParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>>;

    /// Format of the audio produced with the configured parameters.
    fn output_format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }

    /// Synthesize speech from the given text and write it to `path`.
    ///
    /// Default implementation calls `synthesize()` then `SynthesisResult::write_to()`.
    /// Returns the number of bytes written.
    fn synthesize_to_file(
        &mut self,
        text: &str,
        path: &Path,
        params: Option<Self::SynthesisParams>,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let result = self.synthesize(text, params)?;
        result.write_to(path)?;
        Ok(result.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_to_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.mp3");
        let result = SynthesisResult {
            audio: b"ID3audio".to_vec(),
            format: AudioFormat::Mp3,
        };

        result.write_to(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"ID3audio");
        assert!(!dir.path().join("hello.mp3.part").exists());
    }

    #[test]
    fn write_to_missing_directory_fails_without_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("hello.mp3");
        let result = SynthesisResult {
            audio: vec![1, 2, 3],
            format: AudioFormat::Mp3,
        };

        assert!(result.write_to(&path).is_err());
        assert!(!path.exists());
        assert!(!dir.path().join("missing").join("hello.mp3.part").exists());
    }

    #[test]
    fn failed_rename_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.mp3");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();
        let result = SynthesisResult {
            audio: vec![1, 2, 3],
            format: AudioFormat::Mp3,
        };

        assert!(result.write_to(&path).is_err());
        assert!(!dir.path().join("hello.mp3.part").exists());
    }

    #[test]
    fn formats_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&AudioFormat::Mp3).unwrap(), "\"mp3\"");
        assert_eq!(AudioFormat::Flac.extension(), "flac");
    }
}
