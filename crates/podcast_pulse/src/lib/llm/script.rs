use std::{fmt::Debug, future::Future};

use episode_store::ArticleNotes;

/// Synthesizes one multi-speaker dialogue script from the collected notes.
///
/// The notes are passed in original story order; downstream stages rely on
/// the returned text following the `Speaker: utterance` line grammar.
pub trait ScriptSynthesizer {
    const SCRIPT_MODEL: &'static str;

    type Error: Debug;

    fn synthesize_script(
        &self,
        notes: &[ArticleNotes],
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
