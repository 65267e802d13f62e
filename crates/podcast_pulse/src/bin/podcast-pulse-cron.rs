use std::path::PathBuf;

use anyhow::Context;
use episode_store::FsEpisodeStore;
use podcast_pulse::{
    audio::ffmpeg::FfmpegConcat,
    extract::readability::ReadabilityExtractor,
    hn::client::HnClient,
    openai::OpenAIClient,
    speech::elevenlabs::ElevenLabsClient,
    tracing::init_tracing_subscriber,
    EpisodeProcessorBuilder,
};

/// One-shot entry point for external schedulers (cron, systemd timers).
/// Configuration comes from the environment only.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    init_tracing_subscriber()?;

    let openai_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
    let elevenlabs_key =
        std::env::var("ELEVENLABS_API_KEY").context("ELEVENLABS_API_KEY not set")?;
    let episodes_dir = std::env::var("EPISODES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./episodes"));
    let story_count = std::env::var("STORY_COUNT")
        .ok()
        .map(|raw| raw.parse::<usize>().context("Invalid STORY_COUNT"))
        .transpose()?
        .unwrap_or(5);
    let force = std::env::var("FORCE_REGENERATE")
        .is_ok_and(|raw| matches!(raw.as_str(), "1" | "true" | "yes"));

    let openai = OpenAIClient::new(&openai_key);

    let processor = EpisodeProcessorBuilder::new("/var/tmp/podcast-pulse")
        .store(FsEpisodeStore::new(episodes_dir))
        .story_source(HnClient::default())
        .extractor(ReadabilityExtractor::default())
        .note_synthesizer(openai.clone())
        .script_synthesizer(openai)
        .speech_synthesizer(ElevenLabsClient::new(&elevenlabs_key))
        .assembler(FfmpegConcat::default())
        .story_count(story_count)
        .build();

    let record = processor.run(force).await?;
    tracing::info!(
        date = %record.date,
        stories = record.stories.len(),
        "Daily episode generation completed"
    );

    Ok(())
}
