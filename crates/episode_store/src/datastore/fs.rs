use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;

use crate::{
    datastore::{CacheStatus, EpisodeStore},
    EpisodeDraft, EpisodeRecord,
};

/// Filesystem-backed episode store.
///
/// Layout: `<root>/<YYYY-MM-DD>/episode.mp3` plus
/// `<root>/<YYYY-MM-DD>/metadata.json`. Both files are written to a
/// temporary sibling and renamed into place, and the metadata document is
/// always written after the artifact it references.
#[derive(Debug, Clone)]
pub struct FsEpisodeStore {
    root: PathBuf,
}

impl FsEpisodeStore {
    const AUDIO_FILE: &'static str = "episode.mp3";
    const METADATA_FILE: &'static str = "metadata.json";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsEpisodeStore { root: root.into() }
    }

    fn day_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(date.format("%Y-%m-%d").to_string())
    }

    async fn rename_into_place(tmp: &Path, dst: &Path) -> anyhow::Result<()> {
        tokio::fs::rename(tmp, dst)
            .await
            .with_context(|| format!("Failed to move {} into place", dst.display()))
    }
}

impl EpisodeStore for FsEpisodeStore {
    async fn status(&self, date: NaiveDate) -> anyhow::Result<CacheStatus> {
        let metadata_path = self.day_dir(date).join(Self::METADATA_FILE);

        if !tokio::fs::try_exists(&metadata_path).await? {
            return Ok(CacheStatus::Absent);
        }

        let bytes = tokio::fs::read(&metadata_path)
            .await
            .with_context(|| format!("Failed to read {}", metadata_path.display()))?;
        let record = serde_json::from_slice::<EpisodeRecord>(&bytes)
            .inspect_err(|e| tracing::error!(error = ?e, "Episode metadata is unreadable"))
            .with_context(|| format!("Failed to parse {}", metadata_path.display()))?;

        Ok(CacheStatus::Present(record))
    }

    async fn write(&self, date: NaiveDate, draft: EpisodeDraft) -> anyhow::Result<EpisodeRecord> {
        let day_dir = self.day_dir(date);
        tokio::fs::create_dir_all(&day_dir)
            .await
            .with_context(|| format!("Failed to create {}", day_dir.display()))?;

        // Artifact first. The staged file may live on another filesystem, so
        // copy into the day directory and rename from there.
        let audio_path = day_dir.join(Self::AUDIO_FILE);
        let audio_tmp = day_dir.join(format!("{}.tmp", Self::AUDIO_FILE));
        tokio::fs::copy(&draft.audio_path, &audio_tmp)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to stage audio artifact"))
            .with_context(|| {
                format!(
                    "Failed to copy {} into {}",
                    draft.audio_path.display(),
                    day_dir.display()
                )
            })?;
        Self::rename_into_place(&audio_tmp, &audio_path).await?;

        let record = EpisodeRecord {
            date,
            script: draft.script,
            audio_file: audio_path,
            notes: draft.notes,
            stories: draft.stories,
        };

        // Metadata strictly last, once the artifact it points at is complete.
        let metadata_path = day_dir.join(Self::METADATA_FILE);
        let metadata_tmp = day_dir.join(format!("{}.tmp", Self::METADATA_FILE));
        let json = serde_json::to_vec_pretty(&record).context("Failed to serialize metadata")?;
        tokio::fs::write(&metadata_tmp, json)
            .await
            .with_context(|| format!("Failed to write {}", metadata_tmp.display()))?;
        Self::rename_into_place(&metadata_tmp, &metadata_path).await?;

        tracing::info!(date = %date, audio = %record.audio_file.display(), "Episode persisted");

        Ok(record)
    }
}
