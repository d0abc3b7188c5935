use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {message}")]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid pattern: {0}")]
    Pattern(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
    /// The filesystem path the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ExportError::Io { path, .. } => Some(path),
            ExportError::Walk { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}
