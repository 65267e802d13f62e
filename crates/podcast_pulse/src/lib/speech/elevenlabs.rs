use crate::speech::SpeechSynthesizer;

/// ElevenLabs text-to-speech client.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ElevenLabsError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl ElevenLabsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.elevenlabs.io/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl SpeechSynthesizer for ElevenLabsClient {
    const SPEECH_MODEL: &'static str = "eleven_multilingual_v2";

    type Error = ElevenLabsError;

    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, Self::Error> {
        let body = serde_json::json!({
            "model_id": Self::SPEECH_MODEL,
            "text": text,
        });

        let resp = self
            .client
            .post(format!("{}/text-to-speech/{}", self.base_url, voice_id))
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ElevenLabsError::Api { status, message });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}
