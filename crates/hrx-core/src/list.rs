use std::path::Path;

use hrx_archive::Archive;

use crate::error::{Error, Result};
use crate::normalize::{is_selected, selection};
use crate::report::{Op, Report};
use crate::sink::Sink;

/// Report the entries of the archive at `source`, limited to `pathnames`
/// when any are given.
pub fn list<S: AsRef<str>>(
    source: impl AsRef<Path>,
    pathnames: &[S],
    report: &Report,
    sink: &mut dyn Sink,
) -> Result<()> {
    let source = source.as_ref();
    let archive = open(source)?;
    let filter = selection(pathnames);
    let origin = source.display().to_string();

    report.reset();
    for entry in archive.entries() {
        if !is_selected(&filter, entry.pathname()) {
            continue;
        }
        report.record(
            origin.as_str(),
            entry.pathname(),
            Op::Listed { size: entry.size() },
        );
    }

    report.render(&archive, "listing", source, sink);
    Ok(())
}

/// Parse an existing archive file.
pub(crate) fn open(source: &Path) -> Result<Archive> {
    if !hrx_fs::exists(source) {
        return Err(Error::FileNotFound(source.to_path_buf()));
    }
    if !hrx_fs::is_regular_file(source) {
        return Err(Error::NotRegular(source.to_path_buf()));
    }
    let archive = Archive::parse_file(source)?;
    tracing::debug!(archive = %source.display(), entries = archive.len(), "parsed archive");
    Ok(archive)
}
