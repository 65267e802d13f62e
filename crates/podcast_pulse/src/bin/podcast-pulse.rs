use std::{path::PathBuf, str::FromStr};

use apalis::{
    layers::{retry::RetryPolicy, sentry::SentryLayer},
    prelude::*,
};
use apalis_cron::{CronStream, Tick};
use clap::{Parser, Subcommand};
use cron::Schedule;
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

#[derive(Parser)]
#[command(name = "podcast-pulse", about = "Daily Hacker News podcast generator")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// ElevenLabs API key
    #[arg(long, env = "ELEVENLABS_API_KEY")]
    elevenlabs_key: String,

    /// Root directory for persisted episodes
    #[arg(long, env = "EPISODES_DIR", default_value = "./episodes")]
    episodes_dir: PathBuf,

    /// Number of top stories to consider per episode
    #[arg(long, env = "STORY_COUNT", default_value = "5")]
    story_count: usize,

    /// Concurrent external calls per fan-out stage
    #[arg(long, default_value = "4")]
    fan_out: usize,

    /// Working directory for transient audio fragments
    #[arg(long, default_value = "/var/tmp/podcast-pulse")]
    workdir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate today's episode once and exit
    Run {
        /// Regenerate and overwrite even if today's episode already exists
        #[arg(long, short)]
        force: bool,
    },
    /// Start the cron scheduler
    Cron {
        /// Cron schedule expression
        #[arg(long, env = "CRON_SCHEDULE", default_value = "0 0 6 * * *")]
        schedule: String,
    },
}

#[derive(Clone)]
struct Config {
    openai_key: String,
    elevenlabs_key: String,
    episodes_dir: PathBuf,
    story_count: usize,
    fan_out: usize,
    workdir: PathBuf,
}

async fn run_pipeline(config: &Config, force: bool) -> anyhow::Result<()> {
    let openai = OpenAIClient::new(&config.openai_key);

    let processor = EpisodeProcessorBuilder::new(&config.workdir)
        .store(FsEpisodeStore::new(&config.episodes_dir))
        .story_source(HnClient::default())
        .extractor(ReadabilityExtractor::default())
        .note_synthesizer(openai.clone())
        .script_synthesizer(openai)
        .speech_synthesizer(ElevenLabsClient::new(&config.elevenlabs_key))
        .assembler(FfmpegConcat::default())
        .story_count(config.story_count)
        .fan_out(config.fan_out)
        .build();

    let record = processor.run(force).await?;
    tracing::info!(
        date = %record.date,
        stories = record.stories.len(),
        audio = %record.audio_file.display(),
        "Episode ready"
    );

    Ok(())
}

async fn handle_tick(_tick: Tick, config: Data<Config>) -> anyhow::Result<()> {
    tracing::info!(
        story_count = config.story_count,
        "Running scheduled episode generation..."
    );
    run_pipeline(&config, false).await
}

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

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = Config {
        openai_key: cli.openai_key,
        elevenlabs_key: cli.elevenlabs_key,
        episodes_dir: cli.episodes_dir,
        story_count: cli.story_count,
        fan_out: cli.fan_out,
        workdir: cli.workdir,
    };

    match cli.command {
        Command::Run { force } => {
            tracing::info!(story_count = config.story_count, "Generating episode once...");
            run_pipeline(&config, force).await?;
        }
        Command::Cron { schedule } => {
            tracing::info!(%schedule, "Starting cron scheduler...");
            let schedule = Schedule::from_str(&schedule)?;

            let worker = WorkerBuilder::new("podcast-pulse-cron")
                .backend(CronStream::new(schedule))
                .retry(RetryPolicy::retries(3))
                .layer(SentryLayer::new())
                .data(config)
                .build(handle_tick);

            worker.run().await?;
        }
    }

    Ok(())
}
