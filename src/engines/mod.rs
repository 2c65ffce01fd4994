//! Speech synthesis engines.
//!
//! This module contains implementations of text-to-speech engines.
//!
//! # Available Engines
//!
//! Enable engines via Cargo features:
//! - `openai` - OpenAI audio speech API (HTTP, API key required)

#[cfg(feature = "openai")]
pub mod openai;
