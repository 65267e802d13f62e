pub mod builder;

use std::{fmt::Debug, future::Future, path::PathBuf, time::Duration};

use chrono::Local;
use episode_store::{ArticleNotes, CacheStatus, EpisodeDraft, EpisodeRecord, EpisodeStore, Story};
use futures::{StreamExt, TryStreamExt};

use crate::{
    audio::{AudioAssembler, AudioFragment},
    extract::ContentExtractor,
    hn::StorySource,
    llm::{notes::NoteSynthesizer, script::ScriptSynthesizer},
    script::{segment_script, ScriptLine, VoiceMap},
    speech::SpeechSynthesizer,
    Error,
};

// The core daily episode generator: cache check, story fan-out, script and
// speech synthesis, ordered assembly, date-keyed persistence.
#[derive(Debug)]
pub struct EpisodeProcessor<D, L, X, N, S, V, A>
where
    D: EpisodeStore + Send + Sync + 'static,
    L: StorySource + Send + Sync + 'static,
    X: ContentExtractor + Send + Sync + 'static,
    N: NoteSynthesizer + Send + Sync + 'static,
    S: ScriptSynthesizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
    A: AudioAssembler + Send + Sync + 'static,
{
    workdir: PathBuf,
    store: D,
    stories: L,
    extractor: X,
    notes: N,
    script: S,
    speech: V,
    assembler: A,
    story_count: usize,
    fan_out: usize,
    call_timeout: Duration,
    voices: VoiceMap,
}

impl<D, L, X, N, S, V, A> EpisodeProcessor<D, L, X, N, S, V, A>
where
    D: EpisodeStore + Send + Sync + 'static,
    L: StorySource + Send + Sync + 'static,
    X: ContentExtractor + Send + Sync + 'static,
    N: NoteSynthesizer + Send + Sync + 'static,
    S: ScriptSynthesizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
    A: AudioAssembler + Send + Sync + 'static,
{
    /// Generates (or serves) the episode for today.
    ///
    /// The calendar date is derived once up front, so a long run never
    /// silently crosses a day boundary mid-flight. Without
    /// `force_regenerate`, an existing record for the date short-circuits
    /// the run before any external call is made.
    #[tracing::instrument(skip(self))]
    pub async fn run(self, force_regenerate: bool) -> Result<EpisodeRecord, Error> {
        let date = Local::now().date_naive();

        if force_regenerate {
            tracing::info!(%date, "Force regeneration requested, any existing record will be overwritten");
        } else {
            match self
                .store
                .status(date)
                .await
                .map_err(|e| Error::Store(format!("{e:?}")))?
            {
                CacheStatus::Present(record) => {
                    tracing::info!(%date, "Episode already generated, serving cached record");
                    return Ok(record);
                }
                CacheStatus::Absent => {}
            }
        }

        let stories = self.fetch_stories().await?;
        tracing::info!(count = stories.len(), "Fetched candidate stories");

        let survivors = self.collect_notes(stories).await;
        if survivors.is_empty() {
            return Err(Error::NoViableStories);
        }
        tracing::info!(count = survivors.len(), "Stories survived extraction and note synthesis");

        let article_notes: Vec<ArticleNotes> =
            survivors.iter().map(|(_, notes)| notes.clone()).collect();
        let script = self
            .bounded(self.script.synthesize_script(&article_notes))
            .await
            .map_err(Error::ScriptSynthesis)?;

        let lines = segment_script(&script);
        if lines.is_empty() {
            return Err(Error::ScriptSynthesis(
                "script contained no parsable dialogue lines".into(),
            ));
        }
        tracing::info!(lines = lines.len(), "Segmented script");

        let fragments = self.synthesize_lines(&lines).await?;
        let artifact = self.assemble(fragments).await?;

        let draft = EpisodeDraft {
            script,
            audio_path: artifact,
            notes: article_notes.into_iter().map(|n| n.notes).collect(),
            stories: survivors.into_iter().map(|(story, _)| story).collect(),
        };

        let record = self
            .store
            .write(date, draft)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to persist episode"))
            .map_err(|e| Error::Store(format!("{e:?}")))?;

        Ok(record)
    }

    /// Wraps an external call with the per-call timeout; a timeout is
    /// classified identically to the call's normal failure.
    async fn bounded<T, E, F>(&self, fut: F) -> Result<T, String>
    where
        E: Debug,
        F: Future<Output = Result<T, E>>,
    {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(format!("{e:?}")),
            Err(_) => Err(format!("call timed out after {:?}", self.call_timeout)),
        }
    }

    /// Lists the top story ids and resolves the first `story_count` of them,
    /// concurrently but listing-order preserving. Unresolvable items (gone,
    /// or without an article URL) are dropped.
    #[tracing::instrument(skip(self))]
    async fn fetch_stories(&self) -> Result<Vec<Story>, Error> {
        let ids = self
            .bounded(self.stories.list_top())
            .await
            .map_err(Error::Listing)?;

        let stories = futures::stream::iter(ids.into_iter().take(self.story_count))
            .map(|id| async move {
                match self.bounded(self.stories.fetch_story(id)).await {
                    Ok(story) => Some(story),
                    Err(message) => {
                        let err = Error::ItemFetch { id, message };
                        tracing::warn!(error = %err, "Dropping story");
                        None
                    }
                }
            })
            .buffered(self.fan_out)
            .filter_map(|story| async move { story })
            .collect()
            .await;

        Ok(stories)
    }

    /// Extract-then-notes fan-out. Each story's sub-pipeline is independent;
    /// a failure drops that story and never aborts its siblings.
    #[tracing::instrument(skip_all)]
    async fn collect_notes(&self, stories: Vec<Story>) -> Vec<(Story, ArticleNotes)> {
        futures::stream::iter(stories)
            .map(|story| async move {
                match self.story_notes(&story).await {
                    Ok(notes) => Some((story, notes)),
                    Err(err) => {
                        tracing::warn!(error = %err, id = story.id, "Dropping story");
                        None
                    }
                }
            })
            .buffered(self.fan_out)
            .filter_map(|pair| async move { pair })
            .collect()
            .await
    }

    async fn story_notes(&self, story: &Story) -> Result<ArticleNotes, Error> {
        let article = self
            .bounded(self.extractor.extract(&story.url))
            .await
            .map_err(|message| Error::Extraction {
                url: story.url.clone(),
                message,
            })?;

        let notes = self
            .bounded(self.notes.synthesize_notes(&article))
            .await
            .map_err(|message| Error::NoteSynthesis {
                url: story.url.clone(),
                message,
            })?;

        Ok(ArticleNotes {
            url: story.url.clone(),
            title: story.title.clone(),
            notes,
        })
    }

    /// Per-line speech synthesis. Unlike the story fan-out, any failure here
    /// is fatal: an episode with missing audio segments is not an acceptable
    /// output.
    #[tracing::instrument(skip_all)]
    async fn synthesize_lines(&self, lines: &[ScriptLine]) -> Result<Vec<AudioFragment>, Error> {
        let mut fragments: Vec<AudioFragment> = futures::stream::iter(lines)
            .map(|line| async move {
                let voice =
                    self.voices
                        .voice_for(&line.speaker)
                        .ok_or_else(|| Error::LineSynthesis {
                            ordinal: line.ordinal,
                            message: format!("no voice assigned to speaker {:?}", line.speaker),
                        })?;

                let bytes = self
                    .bounded(self.speech.synthesize(&line.text, voice))
                    .await
                    .map_err(|message| Error::LineSynthesis {
                        ordinal: line.ordinal,
                        message,
                    })?;

                Ok::<_, Error>(AudioFragment {
                    ordinal: line.ordinal,
                    bytes,
                })
            })
            .buffered(self.fan_out)
            .try_collect()
            .await?;

        // Completion order is not ordinal order; everything downstream
        // consumes fragments strictly by ordinal.
        fragments.sort_by_key(|fragment| fragment.ordinal);

        Ok(fragments)
    }

    /// Writes fragments into the workdir by zero-padded ordinal and hands
    /// them to the assembler in that order.
    #[tracing::instrument(skip_all)]
    async fn assemble(&self, fragments: Vec<AudioFragment>) -> Result<PathBuf, Error> {
        let fragments_dir = self.workdir.join("fragments");
        tokio::fs::create_dir_all(&fragments_dir)
            .await
            .map_err(|e| {
                Error::Assembly(format!("failed to create {}: {e}", fragments_dir.display()))
            })?;

        let mut paths = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            let path = fragments_dir.join(format!("{:03}.mp3", fragment.ordinal));
            tokio::fs::write(&path, &fragment.bytes)
                .await
                .map_err(|e| Error::Assembly(format!("failed to write {}: {e}", path.display())))?;
            paths.push(path);
        }

        let artifact = self.workdir.join("episode.mp3");
        self.bounded(self.assembler.concat(&paths, &artifact))
            .await
            .map_err(Error::Assembly)?;

        Ok(artifact)
    }
}

impl<D, L, X, N, S, V, A> Drop for EpisodeProcessor<D, L, X, N, S, V, A>
where
    D: EpisodeStore + Send + Sync + 'static,
    L: StorySource + Send + Sync + 'static,
    X: ContentExtractor + Send + Sync + 'static,
    N: NoteSynthesizer + Send + Sync + 'static,
    S: ScriptSynthesizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
    A: AudioAssembler + Send + Sync + 'static,
{
    fn drop(&mut self) {
        let fragments_dir = self.workdir.join("fragments");
        if fragments_dir.exists() {
            if let Err(e) = std::fs::remove_dir_all(&fragments_dir) {
                tracing::warn!(error = ?e, path = ?fragments_dir, "Failed to clean up fragments directory");
            } else {
                tracing::info!(path = ?fragments_dir, "Cleaned up fragments directory");
            }
        }

        let staged_artifact = self.workdir.join("episode.mp3");
        if staged_artifact.exists() {
            if let Err(e) = std::fs::remove_file(&staged_artifact) {
                tracing::warn!(error = ?e, path = ?staged_artifact, "Failed to clean up staged artifact");
            }
        }
    }
}
