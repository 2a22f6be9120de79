use std::path::Path;

use crate::archive::Archive;
use crate::error::{Error, Result};
use crate::report::Event;

impl Archive {
    /// Write entries under `destination` using their stored pathnames.
    ///
    /// With a non-empty `pathnames` only the listed entries are written.
    /// Stops at the first failure; whatever was written stays on disk.
    pub fn extract_to<S: AsRef<str>>(&self, destination: &Path, pathnames: &[S]) -> Result<()> {
        for entry in self.entries() {
            let pathname = entry.pathname();
            if !pathnames.is_empty() && !pathnames.iter().any(|p| p.as_ref() == pathname) {
                continue;
            }

            let target = destination.join(pathname.trim_end_matches('/'));
            if entry.is_dir() {
                std::fs::create_dir_all(&target).map_err(|e| Error::DirectoryCreationFailed {
                    path: target.clone(),
                    source: e,
                })?;
                self.emit(Event::DirectoryCreated {
                    pathname: pathname.to_string(),
                    target,
                });
                continue;
            }

            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            std::fs::write(&target, entry.body()).map_err(|e| Error::io(&target, e))?;
            tracing::debug!(pathname, target = %target.display(), "extracted");
            self.emit(Event::Extracted {
                pathname: pathname.to_string(),
                target,
            });
        }
        Ok(())
    }
}
