pub mod client;

use std::{fmt::Debug, future::Future};

use episode_store::Story;

/// Source of candidate stories for an episode.
///
/// Listing and item resolution are separate calls so the orchestrator can
/// fan item fetches out concurrently while keeping the listing order.
pub trait StorySource {
    const BASE_URL: &'static str;

    type Error: Debug;

    fn list_top(&self) -> impl Future<Output = Result<Vec<u64>, Self::Error>> + Send;

    fn fetch_story(&self, id: u64) -> impl Future<Output = Result<Story, Self::Error>> + Send;
}
