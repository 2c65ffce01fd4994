use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::AudioFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(thiserror::Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OpenAI API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("OpenAI API returned an empty audio body")]
    EmptyAudio,
}

/// JSON body of a speech request.
#[derive(Debug, Serialize)]
pub struct SpeechRequest<'a> {
    pub model: &'a str,
    pub voice: &'a str,
    pub input: &'a str,
    pub response_format: AudioFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<&'a str>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Blocking client for the audio speech endpoint.
pub struct SpeechClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl SpeechClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, OpenAiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: format!("{}/audio/speech", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one speech request and return the encoded audio.
    pub fn speech(&self, request: &SpeechRequest<'_>) -> Result<Vec<u8>, OpenAiError> {
        log::debug!(
            "POST {} model={} voice={} ({} chars)",
            self.endpoint,
            request.model,
            request.voice,
            request.input.chars().count()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let audio = response.bytes()?;
        if audio.is_empty() {
            return Err(OpenAiError::EmptyAudio);
        }
        Ok(audio.to_vec())
    }
}

/// Extract `error.message` from an API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}
