//! OpenAI text-to-speech engine implementation.
//!
//! This module provides a synthesis engine backed by the OpenAI audio speech
//! endpoint (`POST /v1/audio/speech`). Each call sends one piece of text and
//! receives the encoded audio in the configured format.
//!
//! # Requirements
//!
//! An API key, usually taken from the `OPENAI_API_KEY` environment variable.
//!
//! # Defaults
//!
//! | Parameter | Default |
//! |---|---|
//! | model | `gpt-4o-mini-tts` |
//! | voice | `sage` |
//! | response format | `mp3` |
//! | base URL | `https://api.openai.com/v1` |
//! | timeout | none |
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use lesson_tts::{SynthesisEngine, engines::openai::{OpenAiEngine, OpenAiParams}};
//! use std::path::PathBuf;
//!
//! let mut engine = OpenAiEngine::new("sk-...", OpenAiParams::default())?;
//! engine.synthesize_to_file("Hello, world!", &PathBuf::from("hello.mp3"), None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## With Custom Voice
//!
//! ```rust,no_run
//! use lesson_tts::{SynthesisEngine, engines::openai::{OpenAiEngine, OpenAiParamsBuilder}};
//!
//! let params = OpenAiParamsBuilder::default()
//!     .voice("nova")
//!     .instructions("Speak slowly and clearly for language learners.")
//!     .build()?;
//!
//! let mut engine = OpenAiEngine::new("sk-...", params)?;
//! let result = engine.synthesize("Good morning!", None)?;
//! println!("Received {} bytes", result.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod engine;

pub use api::OpenAiError;
pub use engine::{OpenAiEngine, OpenAiParams, OpenAiParamsBuilder};
