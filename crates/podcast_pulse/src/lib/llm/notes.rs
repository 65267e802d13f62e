use std::{fmt::Debug, future::Future};

use crate::extract::Article;

/// Turns one extracted article into free-text analytical notes.
pub trait NoteSynthesizer {
    /// Rough input budget, in tokens, left for article content after the
    /// prompt scaffolding.
    const CONTEXT_WINDOW_LIMIT: usize = 128_000 - 18_000;
    const NOTES_MODEL: &'static str;

    type Error: Debug;

    fn synthesize_notes(
        &self,
        article: &Article,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
