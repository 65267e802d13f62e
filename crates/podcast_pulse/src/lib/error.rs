/// Classified pipeline failures.
///
/// `ItemFetch`, `Extraction` and `NoteSynthesis` are per-story: the
/// orchestrator logs them and drops the story instead of propagating. Every
/// other variant aborts the run before anything is persisted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to list candidate stories: {0}")]
    Listing(String),

    #[error("failed to fetch story {id}: {message}")]
    ItemFetch { id: u64, message: String },

    #[error("failed to extract article content from {url}: {message}")]
    Extraction { url: String, message: String },

    #[error("failed to synthesize notes for {url}: {message}")]
    NoteSynthesis { url: String, message: String },

    #[error("no stories survived content extraction and note synthesis")]
    NoViableStories,

    #[error("script synthesis failed: {0}")]
    ScriptSynthesis(String),

    #[error("speech synthesis failed at line {ordinal}: {message}")]
    LineSynthesis { ordinal: usize, message: String },

    #[error("audio assembly failed: {0}")]
    Assembly(String),

    #[error("episode store failure: {0}")]
    Store(String),
}
