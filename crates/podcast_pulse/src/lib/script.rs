//! # Script line grammar
//!
//! This module turns a synthesized dialogue script into an ordered sequence
//! of speaker-attributed lines, and maps speaker labels to synthesis voices.
//!
//! Grammar, per non-blank line: `<SpeakerLabel>: <utterance>` — a non-empty,
//! colon-free label, a colon, whitespace, then the utterance. Anything else
//! is discarded without aborting.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<speaker>[^:]+?):\s+(?P<text>.+)$").unwrap()
});

/// One speaker-attributed line of the episode script.
///
/// `ordinal` is the line's position among the retained lines and is the sole
/// ordering key for speech synthesis and audio assembly — lines are never
/// reordered or deduplicated downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub speaker: String,
    pub text: String,
    pub ordinal: usize,
}

/// Splits a script into its well-formed dialogue lines, in original order.
///
/// Pure and deterministic: no I/O, same output for the same input. Lines are
/// trimmed, blank lines skipped, and lines that do not match the grammar are
/// dropped. Speaker labels are not validated here — an unknown label is
/// rejected later, at voice resolution.
pub fn segment_script(script: &str) -> Vec<ScriptLine> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let captures = LINE_RE.captures(line)?;
            Some((
                captures["speaker"].trim_end().to_string(),
                captures["text"].trim().to_string(),
            ))
        })
        .enumerate()
        .map(|(ordinal, (speaker, text))| ScriptLine {
            speaker,
            text,
            ordinal,
        })
        .collect()
}

/// Fixed assignment of speaker labels to synthesis voice identifiers.
///
/// Total for the known label set; resolving an unrecognized label yields
/// `None`, which the orchestrator treats as a fatal line-synthesis error
/// rather than a silent skip.
#[derive(Debug, Clone)]
pub struct VoiceMap {
    voices: HashMap<String, String>,
}

impl Default for VoiceMap {
    fn default() -> Self {
        VoiceMap::new([
            ("Host 1", "56AoDkrOh6qfVPDXZ7Pt"), // Cassidy
            ("Host 2", "UgBBYS2sOqTuMpoF3BR0"), // Mark - Natural Conversations
        ])
    }
}

impl VoiceMap {
    pub fn new<S: Into<String>>(assignments: impl IntoIterator<Item = (S, S)>) -> Self {
        VoiceMap {
            voices: assignments
                .into_iter()
                .map(|(speaker, voice)| (speaker.into(), voice.into()))
                .collect(),
        }
    }

    pub fn voice_for(&self, speaker: &str) -> Option<&str> {
        self.voices.get(speaker).map(String::as_str)
    }
}
