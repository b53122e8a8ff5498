use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{GeneratorError, Result};

/// Hex-encoded SHA-256 of an artifact's bytes.
pub fn artifact_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { sha256: String },
    /// The file already held exactly this content and was left untouched
    Unchanged { sha256: String },
}

impl WriteOutcome {
    pub fn sha256(&self) -> &str {
        match self {
            WriteOutcome::Written { sha256 } | WriteOutcome::Unchanged { sha256 } => sha256,
        }
    }
}

/// Write `content` to `path` unless the file already has the same digest.
/// Missing parent directories are created.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    let sha256 = artifact_digest(content.as_bytes());

    // Unreadable existing output is simply overwritten
    if let Ok(existing) = fs::read(path) {
        let existing_sha = artifact_digest(&existing);
        if existing_sha == sha256 {
            debug!("output unchanged path={} sha256={}", path.display(), sha256);
            return Ok(WriteOutcome::Unchanged { sha256 });
        }
        debug!("output differs path={} old_sha256={}", path.display(), existing_sha);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| GeneratorError::io(path, e))?;
    Ok(WriteOutcome::Written { sha256 })
}
