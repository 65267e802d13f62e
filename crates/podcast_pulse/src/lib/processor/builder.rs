use std::{path::PathBuf, time::Duration};

use episode_store::EpisodeStore;

use crate::{
    audio::AudioAssembler, extract::ContentExtractor, hn::StorySource, script::VoiceMap,
    speech::SpeechSynthesizer, EpisodeProcessor, NoteSynthesizer, ScriptSynthesizer,
};

pub struct EpisodeProcessorBuilder<D = (), L = (), X = (), N = (), S = (), V = (), A = ()> {
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

impl EpisodeProcessorBuilder {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            store: (),
            stories: (),
            extractor: (),
            notes: (),
            script: (),
            speech: (),
            assembler: (),
            story_count: 5,
            fan_out: 4,
            call_timeout: Duration::from_secs(120),
            voices: VoiceMap::default(),
        }
    }
}

impl<D, L, X, N, S, V, A> EpisodeProcessorBuilder<D, L, X, N, S, V, A> {
    pub fn store<D2: EpisodeStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> EpisodeProcessorBuilder<D2, L, X, N, S, V, A> {
        EpisodeProcessorBuilder {
            workdir: self.workdir,
            store,
            stories: self.stories,
            extractor: self.extractor,
            notes: self.notes,
            script: self.script,
            speech: self.speech,
            assembler: self.assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }

    pub fn story_source<L2: StorySource + Send + Sync + 'static>(
        self,
        stories: L2,
    ) -> EpisodeProcessorBuilder<D, L2, X, N, S, V, A> {
        EpisodeProcessorBuilder {
            workdir: self.workdir,
            store: self.store,
            stories,
            extractor: self.extractor,
            notes: self.notes,
            script: self.script,
            speech: self.speech,
            assembler: self.assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }

    pub fn extractor<X2: ContentExtractor + Send + Sync + 'static>(
        self,
        extractor: X2,
    ) -> EpisodeProcessorBuilder<D, L, X2, N, S, V, A> {
        EpisodeProcessorBuilder {
            workdir: self.workdir,
            store: self.store,
            stories: self.stories,
            extractor,
            notes: self.notes,
            script: self.script,
            speech: self.speech,
            assembler: self.assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }

    pub fn note_synthesizer<N2: NoteSynthesizer + Send + Sync + 'static>(
        self,
        notes: N2,
    ) -> EpisodeProcessorBuilder<D, L, X, N2, S, V, A> {
        EpisodeProcessorBuilder {
            workdir: self.workdir,
            store: self.store,
            stories: self.stories,
            extractor: self.extractor,
            notes,
            script: self.script,
            speech: self.speech,
            assembler: self.assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }

    pub fn script_synthesizer<S2: ScriptSynthesizer + Send + Sync + 'static>(
        self,
        script: S2,
    ) -> EpisodeProcessorBuilder<D, L, X, N, S2, V, A> {
        EpisodeProcessorBuilder {
            workdir: self.workdir,
            store: self.store,
            stories: self.stories,
            extractor: self.extractor,
            notes: self.notes,
            script,
            speech: self.speech,
            assembler: self.assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }

    pub fn speech_synthesizer<V2: SpeechSynthesizer + Send + Sync + 'static>(
        self,
        speech: V2,
    ) -> EpisodeProcessorBuilder<D, L, X, N, S, V2, A> {
        EpisodeProcessorBuilder {
            workdir: self.workdir,
            store: self.store,
            stories: self.stories,
            extractor: self.extractor,
            notes: self.notes,
            script: self.script,
            speech,
            assembler: self.assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }

    pub fn assembler<A2: AudioAssembler + Send + Sync + 'static>(
        self,
        assembler: A2,
    ) -> EpisodeProcessorBuilder<D, L, X, N, S, V, A2> {
        EpisodeProcessorBuilder {
            workdir: self.workdir,
            store: self.store,
            stories: self.stories,
            extractor: self.extractor,
            notes: self.notes,
            script: self.script,
            speech: self.speech,
            assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }

    pub fn story_count(mut self, story_count: usize) -> Self {
        self.story_count = story_count;
        self
    }

    pub fn fan_out(mut self, fan_out: usize) -> Self {
        self.fan_out = fan_out;
        self
    }

    pub fn call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn voices(mut self, voices: VoiceMap) -> Self {
        self.voices = voices;
        self
    }
}

impl<D, L, X, N, S, V, A> EpisodeProcessorBuilder<D, L, X, N, S, V, A>
where
    D: EpisodeStore + Send + Sync + 'static,
    L: StorySource + Send + Sync + 'static,
    X: ContentExtractor + Send + Sync + 'static,
    N: NoteSynthesizer + Send + Sync + 'static,
    S: ScriptSynthesizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
    A: AudioAssembler + Send + Sync + 'static,
{
    pub fn build(self) -> EpisodeProcessor<D, L, X, N, S, V, A> {
        EpisodeProcessor {
            workdir: self.workdir,
            store: self.store,
            stories: self.stories,
            extractor: self.extractor,
            notes: self.notes,
            script: self.script,
            speech: self.speech,
            assembler: self.assembler,
            story_count: self.story_count,
            fan_out: self.fan_out,
            call_timeout: self.call_timeout,
            voices: self.voices,
        }
    }
}
