use std::sync::{Arc, Mutex};

use episode_store::ArticleNotes;
use podcast_pulse::ScriptSynthesizer;

#[derive(Clone)]
pub struct MockScriptSynthesizer {
    pub script: String,
    pub calls: Arc<Mutex<Vec<Vec<ArticleNotes>>>>,
    pub fail_with: Option<String>,
}

impl MockScriptSynthesizer {
    pub fn new(script: &str) -> Self {
        Self {
            script: script.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl ScriptSynthesizer for MockScriptSynthesizer {
    const SCRIPT_MODEL: &'static str = "mock-script";

    type Error = anyhow::Error;

    async fn synthesize_script(&self, notes: &[ArticleNotes]) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(notes.to_vec());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.script.clone())
    }
}
