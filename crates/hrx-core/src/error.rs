use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("at least one path is required")]
    PathRequired,

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotRegular(PathBuf),

    #[error("not a file or directory: {0}")]
    InvalidInput(PathBuf),

    #[error("destination exists and is not a regular file: {0}")]
    DestinationInvalid(PathBuf),

    #[error("invalid text encoding: {0}")]
    InvalidUnicode(PathBuf),

    #[error("failed to read '{path}': {source}")]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Archive(#[from] hrx_archive::Error),

    #[error(transparent)]
    Fs(#[from] hrx_fs::Error),
}

impl Error {
    /// Errors that only skip the offending file while creating an archive.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Self::InvalidUnicode(_) | Self::NotRegular(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignorable_classes() {
        assert!(Error::InvalidUnicode("bin".into()).is_ignorable());
        assert!(Error::NotRegular("/dev/null".into()).is_ignorable());
        assert!(!Error::PathRequired.is_ignorable());
        assert!(
            !Error::ReadFailed {
                path: "f".into(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }
            .is_ignorable()
        );
    }
}
