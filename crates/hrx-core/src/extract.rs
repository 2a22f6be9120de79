use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hrx_archive::Archive;

use crate::error::{Error, Result};
use crate::list::open;
use crate::normalize::{is_selected, normalize, selection};
use crate::options::Options;
use crate::report::{Op, Report};
use crate::sink::Sink;

/// Unpack the archive at `source` into `destination`, or into
/// `./<archive stem>` when no destination is given.
///
/// With `prune_top_dir` or `trim_prefix` set, every pathname is
/// normalized before it is written. A failure stops extraction and leaves
/// whatever was already written in place.
pub fn extract<S: AsRef<str>>(
    options: &Options,
    source: impl AsRef<Path>,
    destination: Option<&Path>,
    pathnames: &[S],
    report: &Report,
    sink: &mut dyn Sink,
) -> Result<()> {
    let source = source.as_ref();
    let mut archive = open(source)?;
    let destination = destination
        .filter(|d| !d.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_destination(source));

    fs::create_dir_all(&destination).map_err(|e| Error::DirectoryCreationFailed {
        path: destination.clone(),
        source: e,
    })?;

    report.reset();
    archive.set_reporter(Arc::new(report.clone()));
    let filter = selection(pathnames);

    if options.rewrites_pathnames() {
        rewrite_to(&archive, options, &destination, &filter, report)?;
    } else {
        archive.extract_to(&destination, filter.as_slice())?;
    }

    tracing::info!(
        archive = %source.display(),
        destination = %destination.display(),
        "extracted archive"
    );
    report.render(&archive, "extracted", &destination, sink);
    Ok(())
}

/// `./foo` for `some/where/foo.hrx`.
pub fn default_destination(source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    Path::new(".").join(stem)
}

fn rewrite_to(
    archive: &Archive,
    options: &Options,
    destination: &Path,
    filter: &[&str],
    report: &Report,
) -> Result<()> {
    let origin = archive.path().display().to_string();
    for entry in archive.entries() {
        if !is_selected(filter, entry.pathname()) {
            continue;
        }

        let pathname = normalize(entry.pathname().trim_end_matches('/'), options);
        let target = destination.join(&pathname);

        if entry.is_dir() {
            create_dir_all(&target)?;
            tracing::debug!(pathname, target = %target.display(), "created directory");
            report.record(
                origin.as_str(),
                format!("{pathname}/"),
                Op::DirectoryCreated { target },
            );
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }
        fs::write(&target, entry.body()).map_err(|e| Error::WriteFailed {
            path: target.clone(),
            source: e,
        })?;
        tracing::debug!(pathname, target = %target.display(), "wrote file");
        report.record(origin.as_str(), pathname, Op::Wrote { target });
    }
    Ok(())
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sink::Silent;

    const NESTED: &str = "<===> top/dir/file1\none\n<===> top/path/to/file2\ntwo\n<===> top/empty/\n";

    fn fixture() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested.hrx");
        fs::write(&path, NESTED).unwrap();
        (tmp, path)
    }

    #[test]
    fn default_destination_uses_stem() {
        assert_eq!(
            default_destination(Path::new("some/where/simple.hrx")),
            Path::new("./simple")
        );
    }

    #[test]
    fn stored_pathnames() {
        let (tmp, path) = fixture();
        let out = tmp.path().join("out");
        let report = Report::new();
        extract(
            &Options::default(),
            &path,
            Some(out.as_path()),
            &[] as &[&str],
            &report,
            &mut Silent,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(out.join("top/dir/file1")).unwrap(), "one");
        assert_eq!(fs::read_to_string(out.join("top/path/to/file2")).unwrap(), "two");
        assert!(out.join("top/empty").is_dir());
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn pruned_pathnames() {
        let (tmp, path) = fixture();
        let out = tmp.path().join("out");
        let report = Report::new();
        let options = Options::default().prune_top_dir(true);
        extract(
            &options,
            &path,
            Some(out.as_path()),
            &[] as &[&str],
            &report,
            &mut Silent,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(out.join("dir/file1")).unwrap(), "one");
        assert_eq!(fs::read_to_string(out.join("path/to/file2")).unwrap(), "two");
        assert!(out.join("empty").is_dir());
        assert_eq!(
            report.pathnames(),
            vec!["dir/file1", "path/to/file2", "empty/"]
        );
        assert!(matches!(report.entries()[0].op, Op::Wrote { .. }));
        assert!(matches!(report.entries()[2].op, Op::DirectoryCreated { .. }));
    }

    #[test]
    fn trimmed_and_filtered() {
        let (tmp, path) = fixture();
        let out = tmp.path().join("out");
        let report = Report::new();
        let options = Options::default().trim_prefix("top/path");
        extract(
            &options,
            &path,
            Some(out.as_path()),
            &["top/path/to/file2"],
            &report,
            &mut Silent,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(out.join("to/file2")).unwrap(), "two");
        assert!(!out.join("top").exists());
        assert_eq!(report.pathnames(), vec!["to/file2"]);
    }

    #[test]
    fn missing_source() {
        let tmp = TempDir::new().unwrap();
        let result = extract(
            &Options::default(),
            tmp.path().join("nope.hrx"),
            Some(tmp.path()),
            &[] as &[&str],
            &Report::new(),
            &mut Silent,
        );
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn destination_is_created() {
        let (tmp, path) = fixture();
        let out = tmp.path().join("a/b/c");
        extract(
            &Options::default(),
            &path,
            Some(out.as_path()),
            &["top/dir/file1"],
            &Report::new(),
            &mut Silent,
        )
        .unwrap();
        assert!(out.join("top/dir/file1").is_file());
        assert!(!out.join("top/path").exists());
    }
}
