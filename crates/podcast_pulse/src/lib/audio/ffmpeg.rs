use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::audio::AudioAssembler;

/// Stream-copy concatenation via the ffmpeg concat demuxer.
///
/// `-c copy` keeps the encoded fragments byte-for-byte, so per-fragment
/// fidelity is preserved and the operation stays cheap.
#[derive(Debug, Clone)]
pub struct FfmpegConcat {
    program: PathBuf,
}

impl Default for FfmpegConcat {
    fn default() -> Self {
        FfmpegConcat {
            program: PathBuf::from("ffmpeg"),
        }
    }
}

impl FfmpegConcat {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        FfmpegConcat {
            program: program.into(),
        }
    }
}

impl AudioAssembler for FfmpegConcat {
    #[tracing::instrument(skip(self, fragments), fields(fragments = fragments.len()))]
    async fn concat(&self, fragments: &[PathBuf], output: &Path) -> anyhow::Result<()> {
        anyhow::ensure!(!fragments.is_empty(), "No audio fragments to concatenate");

        let mut manifest = String::new();
        for fragment in fragments {
            writeln!(manifest, "file '{}'", fragment.display())?;
        }

        let manifest_path = output.with_extension("txt");
        tokio::fs::write(&manifest_path, manifest)
            .await
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

        // Concatenate into a scratch file so a failed run never leaves a
        // half-written artifact at `output`.
        let scratch = output.with_extension("part.mp3");
        let result = tokio::process::Command::new(&self.program)
            .arg("-y")
            .args(["-f", "concat", "-safe", "0"])
            .arg("-i")
            .arg(&manifest_path)
            .args(["-c", "copy"])
            .arg(&scratch)
            .output()
            .await
            .with_context(|| format!("Failed to spawn {}", self.program.display()))?;

        let _ = tokio::fs::remove_file(&manifest_path).await;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let _ = tokio::fs::remove_file(&scratch).await;
            anyhow::bail!(
                "ffmpeg concat exited with {}: {}",
                result.status,
                stderr.trim()
            );
        }

        if !tokio::fs::try_exists(&scratch).await? {
            anyhow::bail!("ffmpeg did not produce expected file: {}", scratch.display());
        }

        tokio::fs::rename(&scratch, output)
            .await
            .with_context(|| format!("Failed to move {} into place", output.display()))?;

        Ok(())
    }
}
