use std::ops::Deref;

use episode_store::Story;
use serde::Deserialize;

use crate::hn::StorySource;

/// Hacker News Firebase API client.
#[derive(Debug, Clone, Default)]
pub struct HnClient(pub reqwest::Client);

impl Deref for HnClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Raw item payload. Job ads and Ask HN posts carry no `url`; those are
/// rejected at conversion so the orchestrator can drop them.
#[derive(Debug, Deserialize)]
struct HnItem {
    id: u64,
    title: Option<String>,
    url: Option<String>,
}

impl StorySource for HnClient {
    const BASE_URL: &'static str = "https://hacker-news.firebaseio.com/v0";

    type Error = anyhow::Error;

    async fn list_top(&self) -> Result<Vec<u64>, Self::Error> {
        let ids = self
            .get(format!("{}/topstories.json", Self::BASE_URL))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<u64>>()
            .await?;

        Ok(ids)
    }

    async fn fetch_story(&self, id: u64) -> Result<Story, Self::Error> {
        let item = self
            .get(format!("{}/item/{}.json", Self::BASE_URL, id))
            .send()
            .await?
            .error_for_status()?
            .json::<Option<HnItem>>()
            .await?
            .ok_or_else(|| anyhow::anyhow!("Item {id} does not exist"))?;

        let title = item
            .title
            .ok_or_else(|| anyhow::anyhow!("Item {id} has no title"))?;
        let url = item
            .url
            .ok_or_else(|| anyhow::anyhow!("Item {id} has no article URL"))?;

        Ok(Story {
            id: item.id,
            title,
            url,
        })
    }
}
