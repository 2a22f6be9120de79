use std::path::{Path, PathBuf};

/// Something the archive did that an observer may want to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The boundary had to grow so no body collides with it.
    Boundary { width: usize },
    /// A file entry was written to disk.
    Extracted { pathname: String, target: PathBuf },
    /// A directory entry was created on disk.
    DirectoryCreated { pathname: String, target: PathBuf },
}

/// Receives events from an [`Archive`](crate::Archive).
///
/// `source` is the path of the archive file the event belongs to.
pub trait Reporter: Send + Sync {
    fn report(&self, source: &Path, event: Event);
}

impl<F> Reporter for F
where
    F: Fn(&Path, Event) + Send + Sync,
{
    fn report(&self, source: &Path, event: Event) {
        self(source, event)
    }
}
