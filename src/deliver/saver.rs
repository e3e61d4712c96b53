//! File-save capability
//!
//! Trait seam for the host environment's save facility plus the local-disk
//! implementation.

use crate::deliver::DeliverError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Host file-save capability
///
/// Accepts document text and a suggested filename and performs a local save.
#[async_trait]
pub trait FileSaver: Send + Sync {
    /// Save `contents` under `filename`, returning the path written
    async fn save(&self, contents: &str, filename: &str) -> Result<PathBuf, DeliverError>;
}

/// Saves reports into a configured directory on local disk
pub struct DiskSaver {
    output_dir: PathBuf,
}

impl DiskSaver {
    /// Create a saver writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl FileSaver for DiskSaver {
    async fn save(&self, contents: &str, filename: &str) -> Result<PathBuf, DeliverError> {
        // The filename is a suggestion from the caller, not a path.
        if filename.is_empty() || filename.contains('/') || filename.contains('\\') {
            return Err(DeliverError::InvalidFilename(filename.to_string()));
        }

        fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(filename);
        fs::write(&path, contents).await?;

        tracing::info!(path = %path.display(), bytes = contents.len(), "Report saved");
        Ok(path)
    }
}
