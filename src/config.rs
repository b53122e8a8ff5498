use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::{
    COMPLETE_DATABASE_FILE, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH, HEADER_SOURCE_FILES,
    INPUT_DIR_ENV, OUTPUT_PATH_ENV,
};
use crate::error::{GeneratorError, Result};
use crate::types::SourceFormat;

/// Run configuration: where the sheets live, which ones to read in what
/// order, and where the registry script goes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceEntry>,
}

/// One input sheet and the layout it is declared to have.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceEntry {
    pub file: String,
    pub format: SourceFormat,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_sources() -> Vec<SourceEntry> {
    let mut sources = vec![SourceEntry {
        file: COMPLETE_DATABASE_FILE.to_string(),
        format: SourceFormat::Positional,
    }];
    sources.extend(HEADER_SOURCE_FILES.iter().map(|file| SourceEntry {
        file: file.to_string(),
        format: SourceFormat::Header,
    }));
    sources
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
            sources: default_sources(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to the built-in source
    /// list when the file does not exist. Environment overrides are applied
    /// last.
    pub fn load(path: &Path) -> Result<Self> {
        let config = match fs::read_to_string(path) {
            Ok(content) => {
                info!("Loaded configuration from {}", path.display());
                Self::from_toml_str(&content)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("No configuration at {}; using built-in defaults", path.display());
                Self::default()
            }
            Err(e) => {
                return Err(GeneratorError::Config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(config.with_overrides(
            std::env::var(INPUT_DIR_ENV).ok(),
            std::env::var(OUTPUT_PATH_ENV).ok(),
        ))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the input directory and/or output path; blank values are ignored.
    pub fn with_overrides(mut self, input_dir: Option<String>, output_path: Option<String>) -> Self {
        if let Some(dir) = input_dir.filter(|v| !v.trim().is_empty()) {
            self.input_dir = PathBuf::from(dir);
        }
        if let Some(out) = output_path.filter(|v| !v.trim().is_empty()) {
            self.output_path = PathBuf::from(out);
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(GeneratorError::Config(
                "at least one source must be configured".to_string(),
            ));
        }
        if let Some(entry) = self.sources.iter().find(|s| s.file.trim().is_empty()) {
            return Err(GeneratorError::Config(format!(
                "source with empty file name (format {})",
                entry.format
            )));
        }
        Ok(())
    }

    pub fn source_path(&self, entry: &SourceEntry) -> PathBuf {
        self.input_dir.join(&entry.file)
    }
}
