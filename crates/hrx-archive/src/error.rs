use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid boundary on line {line}")]
    InvalidBoundary { line: usize },

    #[error("invalid boundary width: {0}")]
    InvalidBoundaryWidth(usize),

    #[error("invalid pathname '{pathname}': {reason}")]
    InvalidPath { pathname: String, reason: &'static str },

    #[error("duplicate pathname '{0}'")]
    DuplicatePath(String),

    #[error("consecutive comments on line {line}")]
    ConsecutiveComments { line: usize },

    #[error("directory '{0}' must not have a body")]
    DirectoryBody(String),

    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("'{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
