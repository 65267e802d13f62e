use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use podcast_pulse::audio::AudioAssembler;

/// Byte-appending concatenation: the assembled artifact is the fragment
/// files' bytes in the order they were handed over.
#[derive(Clone, Default)]
pub struct MockAssembler {
    pub calls: Arc<Mutex<Vec<Vec<PathBuf>>>>,
    pub fail_with: Option<String>,
}

impl MockAssembler {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl AudioAssembler for MockAssembler {
    async fn concat(&self, fragments: &[PathBuf], output: &Path) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(fragments.to_vec());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        let mut assembled = Vec::new();
        for fragment in fragments {
            assembled.extend(tokio::fs::read(fragment).await?);
        }
        tokio::fs::write(output, assembled).await?;
        Ok(())
    }
}
