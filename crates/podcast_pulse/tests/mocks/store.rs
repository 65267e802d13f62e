use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use episode_store::{CacheStatus, EpisodeDraft, EpisodeRecord, EpisodeStore};

#[derive(Clone, Default)]
pub struct MockEpisodeStore {
    pub records: Arc<Mutex<HashMap<NaiveDate, EpisodeRecord>>>,
    pub written: Arc<Mutex<Vec<(NaiveDate, EpisodeDraft)>>>,
    /// Artifact bytes captured at write time, before the run's working
    /// directory is cleaned up.
    pub audio: Arc<Mutex<Vec<Vec<u8>>>>,
    pub fail_with: Option<String>,
}

impl MockEpisodeStore {
    pub fn with_record(record: EpisodeRecord) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().insert(record.date, record);
        store
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl EpisodeStore for MockEpisodeStore {
    async fn status(&self, date: NaiveDate) -> anyhow::Result<CacheStatus> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .map_or(CacheStatus::Absent, CacheStatus::Present))
    }

    async fn write(&self, date: NaiveDate, draft: EpisodeDraft) -> anyhow::Result<EpisodeRecord> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }

        let artifact = std::fs::read(&draft.audio_path)?;
        self.audio.lock().unwrap().push(artifact);

        let record = EpisodeRecord {
            date,
            script: draft.script.clone(),
            audio_file: draft.audio_path.clone(),
            notes: draft.notes.clone(),
            stories: draft.stories.clone(),
        };
        self.written.lock().unwrap().push((date, draft));
        self.records.lock().unwrap().insert(date, record.clone());

        Ok(record)
    }
}
