/// Usage errors, detected before anything touches the filesystem.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("missing one of -l, -c or -x")]
    MissingMode,

    #[error("only one of -l, -c or -x are allowed")]
    ConflictingModes,

    #[error("-f is not found or not an archive")]
    ArchiveNotFound,

    #[error("missing -f archive")]
    MissingArchive,

    #[error("-o is not found or not a directory")]
    DirectoryNotFound,
}
