use std::{io::Cursor, ops::Deref};

use url::Url;

use crate::extract::{Article, ContentExtractor};

/// Readability-based article extractor: fetches the page over HTTP and
/// reduces it to title + body text.
#[derive(Debug, Clone, Default)]
pub struct ReadabilityExtractor(pub reqwest::Client);

impl Deref for ReadabilityExtractor {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ContentExtractor for ReadabilityExtractor {
    type Error = anyhow::Error;

    async fn extract(&self, url: &str) -> Result<Article, Self::Error> {
        let parsed = Url::parse(url)?;

        let body = self
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let product = readability::extractor::extract(&mut Cursor::new(body.as_ref()), &parsed)
            .map_err(|e| anyhow::anyhow!("Readability extraction failed: {e:?}"))?;

        anyhow::ensure!(
            !product.text.trim().is_empty(),
            "No article text extracted from {url}"
        );

        Ok(Article {
            url: url.to_string(),
            title: product.title,
            text: product.text,
        })
    }
}
