//! ElevenLabs text-to-speech proxy client.
//!
//! The frontend speaks route warnings aloud; this client forwards the
//! text and returns the MP3 audio bytes.

use serde_json::json;

/// Default base URL for the ElevenLabs API.
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Default voice ("Rachel").
const DEFAULT_VOICE_ID: &str = "UgBBYS2sOqTuMpoF3BR0";

/// Model used for synthesis.
const MODEL_ID: &str = "eleven_turbo_v2_5";

/// Errors from the text-to-speech client.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("TTS error {status}: {message}")]
    Api { status: u16, message: String },

    /// No API key configured
    #[error("ElevenLabs Key Missing")]
    NotConfigured,
}

/// Configuration for the text-to-speech client.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// API key for xi-api-key header authentication
    pub api_key: String,
    /// Voice to synthesize with
    pub voice_id: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SpeechConfig {
    /// Create a new config with the given API key and the default voice.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom voice.
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the ElevenLabs text-to-speech API.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    http: reqwest::Client,
    api_key: String,
    voice_id: String,
    base_url: String,
}

impl SpeechClient {
    /// Create a new text-to-speech client.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            voice_id: config.voice_id,
            base_url: config.base_url,
        })
    }

    /// Synthesize `text` and return the MP3 bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        if self.api_key.is_empty() {
            return Err(SpeechError::NotConfigured);
        }

        let url = format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id);

        let payload = json!({
            "text": text,
            "model_id": MODEL_ID,
            "voice_settings": {"stability": 0.5, "similarity_boost": 0.5}
        });

        let response = self
            .http
            .post(&url)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
