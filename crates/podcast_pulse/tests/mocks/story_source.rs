use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use episode_store::Story;
use podcast_pulse::hn::StorySource;

#[derive(Clone)]
pub struct MockStorySource {
    pub stories: Vec<Story>,
    pub fail_fetch_ids: HashSet<u64>,
    pub list_calls: Arc<Mutex<usize>>,
    pub fetch_calls: Arc<Mutex<Vec<u64>>>,
    pub fail_with: Option<String>,
}

impl MockStorySource {
    pub fn with_stories(count: u64) -> Self {
        let stories = (1..=count)
            .map(|id| Story {
                id,
                title: format!("Story {id}"),
                url: format!("https://example.com/{id}"),
            })
            .collect();
        Self {
            stories,
            fail_fetch_ids: HashSet::new(),
            list_calls: Arc::new(Mutex::new(0)),
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::with_stories(0)
        }
    }
}

impl StorySource for MockStorySource {
    const BASE_URL: &'static str = "https://news.mock/v0";

    type Error = anyhow::Error;

    async fn list_top(&self) -> Result<Vec<u64>, Self::Error> {
        *self.list_calls.lock().unwrap() += 1;
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.stories.iter().map(|s| s.id).collect())
    }

    async fn fetch_story(&self, id: u64) -> Result<Story, Self::Error> {
        self.fetch_calls.lock().unwrap().push(id);
        if self.fail_fetch_ids.contains(&id) {
            return Err(anyhow::anyhow!("Item {id} has no article URL"));
        }
        self.stories
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Item {id} does not exist"))
    }
}
