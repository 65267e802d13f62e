pub mod ffmpeg;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

/// One synthesized audio segment, paired with the ordinal of the script line
/// it was produced from. Fragments are transient: they exist only inside a
/// run's working directory until the assembled artifact is persisted.
pub struct AudioFragment {
    pub ordinal: usize,
    pub bytes: Vec<u8>,
}

/// Concatenates fragment files, already sorted by ordinal, into one
/// continuous audio artifact.
///
/// Concatenation must be lossless — no re-encode, no resample — and must
/// fail without producing `output` rather than leave a half-written file.
pub trait AudioAssembler {
    fn concat(
        &self,
        fragments: &[PathBuf],
        output: &Path,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
