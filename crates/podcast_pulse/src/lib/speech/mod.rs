pub mod elevenlabs;

use std::{fmt::Debug, future::Future};

/// Converts one utterance into an encoded audio byte stream for a given
/// voice. One call per script line.
pub trait SpeechSynthesizer {
    const SPEECH_MODEL: &'static str;

    type Error: Debug;

    fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;
}
