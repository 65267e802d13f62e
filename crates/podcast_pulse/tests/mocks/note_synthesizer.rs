use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use podcast_pulse::{extract::Article, NoteSynthesizer};

#[derive(Clone)]
pub struct MockNoteSynthesizer {
    pub notes: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_urls: HashSet<String>,
    pub fail_with: Option<String>,
}

impl MockNoteSynthesizer {
    pub fn new(notes: &str) -> Self {
        Self {
            notes: notes.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_urls: HashSet::new(),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }

    pub fn failing_for(urls: impl IntoIterator<Item = String>) -> Self {
        Self {
            fail_urls: urls.into_iter().collect(),
            ..Self::new("notes")
        }
    }
}

impl NoteSynthesizer for MockNoteSynthesizer {
    const NOTES_MODEL: &'static str = "mock-notes";

    type Error = anyhow::Error;

    async fn synthesize_notes(&self, article: &Article) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(article.url.clone());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        if self.fail_urls.contains(&article.url) {
            return Err(anyhow::anyhow!("Rate limited while summarizing {}", article.url));
        }
        Ok(self.notes.clone())
    }
}
