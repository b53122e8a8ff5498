use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
