pub mod readability;

use std::{fmt::Debug, future::Future};

use serde::Serialize;

/// Structured text content extracted from one article URL.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub text: String,
}

/// Resolves a URL to readable article content.
///
/// Extraction may fail per article (paywalled, unreachable, malformed
/// markup); the orchestrator treats any failure here as "drop the story".
pub trait ContentExtractor {
    type Error: Debug;

    fn extract(&self, url: &str) -> impl Future<Output = Result<Article, Self::Error>> + Send;
}
