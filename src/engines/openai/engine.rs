use std::time::Duration;

use derive_builder::Builder;

use crate::{AudioFormat, SynthesisEngine, SynthesisResult};

use super::api::{OpenAiError, SpeechClient, SpeechRequest, DEFAULT_BASE_URL};

/// Parameters for configuring OpenAI speech requests.
///
/// Build with [`OpenAiParamsBuilder`]; unset fields take the defaults below.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), default)]
pub struct OpenAiParams {
    /// Speech model, default `gpt-4o-mini-tts`.
    pub model: String,
    /// Voice name (e.g. `"sage"`, `"nova"`, `"alloy"`).
    pub voice: String,
    /// Encoding of the returned audio, default MP3.
    pub response_format: AudioFormat,
    /// Speech speed multiplier. Range: 0.25–4.0. `None` = API default.
    #[builder(setter(into, strip_option))]
    pub speed: Option<f32>,
    /// Free-form delivery instructions (tone, pacing). Ignored by older models.
    #[builder(setter(into, strip_option))]
    pub instructions: Option<String>,
    /// API base URL without the `/audio/speech` suffix.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    #[builder(setter(into, strip_option))]
    pub timeout: Option<Duration>,
}

impl Default for OpenAiParams {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini-tts".to_string(),
            voice: "sage".to_string(),
            response_format: AudioFormat::Mp3,
            speed: None,
            instructions: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// OpenAI text-to-speech engine.
///
/// Holds one HTTP client and one set of parameters for the lifetime of the
/// engine. Per-call parameters may be passed to `synthesize`, but the model
/// endpoint and timeout are fixed at construction.
///
/// # Quick Start
///
/// ```rust,no_run
/// use lesson_tts::{SynthesisEngine, engines::openai::{OpenAiEngine, OpenAiParams}};
///
/// let mut engine = OpenAiEngine::new("sk-...", OpenAiParams::default())?;
/// let result = engine.synthesize("Hello, world!", None)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct OpenAiEngine {
    client: SpeechClient,
    params: OpenAiParams,
}

impl OpenAiEngine {
    /// Create an engine using `api_key` for bearer authentication.
    pub fn new(api_key: impl Into<String>, params: OpenAiParams) -> Result<Self, OpenAiError> {
        let client = SpeechClient::new(api_key, &params.base_url, params.timeout)?;
        log::info!(
            "OpenAI speech engine ready: model={}, voice={}, endpoint={}",
            params.model,
            params.voice,
            client.endpoint()
        );
        Ok(Self { client, params })
    }
}

impl SynthesisEngine for OpenAiEngine {
    type SynthesisParams = OpenAiParams;

    fn synthesize(
        &mut self,
        text: &str,
        params: Option<Self::SynthesisParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>> {
        let p = params.as_ref().unwrap_or(&self.params);

        let request = SpeechRequest {
            model: &p.model,
            voice: &p.voice,
            input: text,
            response_format: p.response_format,
            speed: p.speed,
            instructions: p.instructions.as_deref(),
        };
        let audio = self.client.speech(&request)?;

        Ok(SynthesisResult {
            audio,
            format: p.response_format,
        })
    }

    fn output_format(&self) -> AudioFormat {
        self.params.response_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_unset_defaults() {
        let params = OpenAiParamsBuilder::default()
            .voice("nova")
            .speed(1.25f32)
            .build()
            .unwrap();

        assert_eq!(params.voice, "nova");
        assert_eq!(params.speed, Some(1.25));
        assert_eq!(params.model, "gpt-4o-mini-tts");
        assert_eq!(params.response_format, AudioFormat::Mp3);
        assert_eq!(params.base_url, DEFAULT_BASE_URL);
        assert!(params.timeout.is_none());
    }

    #[test]
    fn output_format_follows_params() {
        let params = OpenAiParamsBuilder::default()
            .response_format(AudioFormat::Opus)
            .build()
            .unwrap();
        let engine = OpenAiEngine::new("sk-test", params).unwrap();
        assert_eq!(engine.output_format(), AudioFormat::Opus);
    }
}
