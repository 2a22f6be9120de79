use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("'{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Error {
    let path = path.into();
    match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound { path },
        io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
        _ => Error::Io { path, source: err },
    }
}

pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map(PathBuf::from)
        .unwrap_or_else(|| root.to_path_buf());
    match err.into_io_error() {
        Some(io) => from_io(path, io),
        None => Error::Io {
            path,
            source: io::Error::other("filesystem loop"),
        },
    }
}
