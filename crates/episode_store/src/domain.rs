use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A candidate source article considered for inclusion in an episode.
///
/// Identity is the story `id`. A story is immutable once fetched and lives
/// for a single pipeline run; only the stories that survived the run are
/// persisted as part of the [`EpisodeRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub url: String,
}

/// Analytical notes produced for one successfully extracted article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleNotes {
    pub url: String,
    pub title: String,
    pub notes: String,
}

/// The durable, date-keyed unit of output.
///
/// For a given date at most one record exists; a forced regeneration replaces
/// the record wholesale, never partially. This is also the shape of the
/// per-day `metadata.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub date: NaiveDate,
    pub script: String,
    pub audio_file: PathBuf,
    pub notes: Vec<String>,
    pub stories: Vec<Story>,
}

/// What a finished pipeline run hands to the store.
///
/// `audio_path` points at the fully assembled artifact staged in the run's
/// working directory; the store moves it into the per-date directory and
/// returns the persisted [`EpisodeRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeDraft {
    pub script: String,
    pub audio_path: PathBuf,
    pub notes: Vec<String>,
    pub stories: Vec<Story>,
}
