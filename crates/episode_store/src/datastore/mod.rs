use std::future::Future;

use chrono::NaiveDate;

use crate::{EpisodeDraft, EpisodeRecord};

pub mod fs;

/// Outcome of a cache lookup for a given date.
///
/// `Present` carries the full record so callers never have to follow an
/// existence check with a separate read that could observe partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    Absent,
    Present(EpisodeRecord),
}

pub trait EpisodeStore {
    fn status(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = anyhow::Result<CacheStatus>> + Send;

    /// Persist a finished episode under `date`, replacing any existing record
    /// wholesale. The audio artifact must be fully written before the
    /// metadata document that references it becomes visible to readers.
    fn write(
        &self,
        date: NaiveDate,
        draft: EpisodeDraft,
    ) -> impl Future<Output = anyhow::Result<EpisodeRecord>> + Send;
}

impl<T: EpisodeStore + Send + Sync> EpisodeStore for &T {
    async fn status(&self, date: NaiveDate) -> anyhow::Result<CacheStatus> {
        (**self).status(date).await
    }

    async fn write(&self, date: NaiveDate, draft: EpisodeDraft) -> anyhow::Result<EpisodeRecord> {
        (**self).write(date, draft).await
    }
}
