use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use podcast_pulse::speech::SpeechSynthesizer;

/// Encodes each utterance as `audio:<text>;` so assembled artifacts can be
/// checked for content and order. `delays_ms` lets a test make a
/// later-ordinal line finish first.
#[derive(Clone, Default)]
pub struct MockSpeechSynthesizer {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub delays_ms: HashMap<String, u64>,
    pub fail_with: Option<String>,
}

impl MockSpeechSynthesizer {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn with_delays(delays_ms: impl IntoIterator<Item = (&'static str, u64)>) -> Self {
        Self {
            delays_ms: delays_ms
                .into_iter()
                .map(|(text, ms)| (text.to_string(), ms))
                .collect(),
            ..Default::default()
        }
    }
}

impl SpeechSynthesizer for MockSpeechSynthesizer {
    const SPEECH_MODEL: &'static str = "mock-tts";

    type Error = anyhow::Error;

    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), voice_id.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        if let Some(delay) = self.delays_ms.get(text) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }
        Ok(format!("audio:{text};").into_bytes())
    }
}
