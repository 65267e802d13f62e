use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use podcast_pulse::extract::{Article, ContentExtractor};

#[derive(Clone, Default)]
pub struct MockExtractor {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_urls: HashSet<String>,
    pub fail_with: Option<String>,
}

impl MockExtractor {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_for(urls: impl IntoIterator<Item = String>) -> Self {
        Self {
            fail_urls: urls.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl ContentExtractor for MockExtractor {
    type Error = anyhow::Error;

    async fn extract(&self, url: &str) -> Result<Article, Self::Error> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        if self.fail_urls.contains(url) {
            return Err(anyhow::anyhow!("No article text extracted from {url}"));
        }
        Ok(Article {
            url: url.to_string(),
            title: format!("Title for {url}"),
            text: format!("Body text for {url}"),
        })
    }
}
