use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid state path: {0}")]
    InvalidStatePath(PathBuf),
    #[error("corrupt state file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unsupported state file version {0}")]
    UnsupportedVersion(u32),
}

pub type Result<T> = std::result::Result<T, StateError>;
