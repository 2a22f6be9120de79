use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hrx_archive::{Event, Reporter};

/// What happened to one pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// Shown by a listing, `size` is the body length.
    Listed { size: u64 },
    /// Added to a new archive from `source` on disk.
    Archived { source: PathBuf },
    /// Replaced an entry already in the archive.
    Appended { size: u64 },
    /// Written to disk under its stored pathname.
    Extracted { target: PathBuf },
    /// Written to disk under a rewritten pathname.
    Wrote { target: PathBuf },
    /// Directory created on disk.
    DirectoryCreated { target: PathBuf },
    /// Left out of a new archive.
    Skipped { reason: String },
    /// The archive boundary grew. Never rendered.
    Boundary { width: usize },
}

impl Op {
    pub fn tag(&self) -> &'static str {
        match self {
            Op::Listed { .. } => "listing",
            Op::Archived { .. } => "archived",
            Op::Appended { .. } => "appended",
            Op::Extracted { .. } => "extracted",
            Op::Wrote { .. } => "wrote",
            Op::DirectoryCreated { .. } => "created",
            Op::Skipped { .. } => "skipped",
            Op::Boundary { .. } => "boundary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub source: String,
    pub pathname: String,
    pub op: Op,
}

/// Append-only event log for one operation.
///
/// Cloning yields another handle to the same log, so an archive can
/// report into it while the caller keeps its own handle.
#[derive(Clone, Debug, Default)]
pub struct Report {
    entries: Arc<Mutex<Vec<ReportEntry>>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&self) {
        self.lock().clear();
    }

    pub fn record(&self, source: impl Into<String>, pathname: impl Into<String>, op: Op) {
        self.lock().push(ReportEntry {
            source: source.into(),
            pathname: pathname.into(),
            op,
        });
    }

    /// Snapshot of the recorded entries.
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.lock().clone()
    }

    pub fn pathnames(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.pathname.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ReportEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for Report {
    fn report(&self, source: &Path, event: Event) {
        let source = source.display().to_string();
        match event {
            Event::Boundary { width } => {
                self.record(source, "", Op::Boundary { width });
            }
            Event::Extracted { pathname, target } => {
                self.record(source, pathname, Op::Extracted { target });
            }
            Event::DirectoryCreated { pathname, target } => {
                self.record(source, pathname, Op::DirectoryCreated { target });
            }
        }
    }
}
