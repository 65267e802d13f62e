mod error;
mod llm;
mod processor;

pub mod audio;
pub mod extract;
pub mod hn;
pub mod script;
pub mod speech;
pub mod tracing;

pub use error::Error;
pub use llm::openai;
pub use llm::{notes::NoteSynthesizer, script::ScriptSynthesizer};
pub use processor::{builder::EpisodeProcessorBuilder, EpisodeProcessor};
