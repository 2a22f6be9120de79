//! Filesystem queries used while building and unpacking archives.
//!
//! Listings never follow symlinks: a link shows up as a plain entry and it
//! is up to the caller to decide whether the target is usable.

mod error;

pub use error::{Error, Result, from_io};

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().symlink_metadata().is_ok()
}

pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// True for regular files, following symlinks.
pub fn is_regular_file(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}

/// Size in bytes, 0 when the path can't be read.
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Total size of the regular files below `dir`.
pub fn dir_size(dir: impl AsRef<Path>) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Non-directory entries directly inside `dir`.
pub fn list_files(dir: impl AsRef<Path>, include_hidden: bool) -> Result<Vec<PathBuf>> {
    walk(dir.as_ref(), include_hidden, Some(1))
}

/// Non-directory entries anywhere below `dir`.
pub fn list_all_files(dir: impl AsRef<Path>, include_hidden: bool) -> Result<Vec<PathBuf>> {
    walk(dir.as_ref(), include_hidden, None)
}

fn walk(dir: &Path, include_hidden: bool, max_depth: Option<usize>) -> Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(dir).map_err(|e| from_io(dir, e))?;
    if !meta.is_dir() {
        return Err(Error::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| include_hidden || !is_hidden(e))
    {
        let entry = entry.map_err(|e| error::from_walk(dir, e))?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Dot names below the root. The root itself is never hidden, so `.` and
/// dot-directories given explicitly are still walked.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("b/deeper")).unwrap();
        std::fs::create_dir_all(root.join(".hidden-dir")).unwrap();
        std::fs::write(root.join("a.txt"), "aaa").unwrap();
        std::fs::write(root.join(".dotfile"), "x").unwrap();
        std::fs::write(root.join("b/c.txt"), "cc").unwrap();
        std::fs::write(root.join("b/deeper/d.txt"), "d").unwrap();
        std::fs::write(root.join(".hidden-dir/e.txt"), "e").unwrap();
        temp_dir
    }

    #[test]
    fn list_files_top_level_only() {
        let temp_dir = tree();
        let root = temp_dir.path();
        assert_eq!(list_files(root, false).unwrap(), vec![root.join("a.txt")]);
        assert_eq!(
            list_files(root, true).unwrap(),
            vec![root.join(".dotfile"), root.join("a.txt")]
        );
    }

    #[test]
    fn list_all_files_recursive_sorted() {
        let temp_dir = tree();
        let root = temp_dir.path();
        assert_eq!(
            list_all_files(root, false).unwrap(),
            vec![
                root.join("a.txt"),
                root.join("b/c.txt"),
                root.join("b/deeper/d.txt"),
            ]
        );
        assert_eq!(list_all_files(root, true).unwrap().len(), 5);
    }

    #[test]
    fn hidden_root_is_walked() {
        let temp_dir = tree();
        let hidden = temp_dir.path().join(".hidden-dir");
        assert_eq!(list_files(&hidden, false).unwrap(), vec![hidden.join("e.txt")]);
    }

    #[test]
    fn list_missing_directory() {
        let result = list_all_files("/.not/a/dir", false);
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn list_a_file_is_an_error() {
        let temp_dir = tree();
        assert!(list_files(temp_dir.path().join("a.txt"), false).is_err());
    }

    #[test]
    fn sizes() {
        let temp_dir = tree();
        let root = temp_dir.path();
        assert_eq!(file_size(root.join("a.txt")), 3);
        assert_eq!(file_size(root.join("nope")), 0);
        assert_eq!(dir_size(root.join("b")), 3);
        assert_eq!(dir_size(root), 8);
    }

    #[test]
    fn predicates() {
        let temp_dir = tree();
        let root = temp_dir.path();
        assert!(exists(root.join("a.txt")));
        assert!(!exists(root.join("nope")));
        assert!(is_dir(root.join("b")));
        assert!(is_regular_file(root.join("a.txt")));
        assert!(!is_regular_file(root.join("b")));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_listed_not_followed() {
        let temp_dir = tree();
        let root = temp_dir.path();
        std::os::unix::fs::symlink(root.join("b"), root.join("link-to-b")).unwrap();
        std::os::unix::fs::symlink("/dev/null", root.join("dev-null")).unwrap();

        let files = list_files(root, false).unwrap();
        assert!(files.contains(&root.join("link-to-b")));
        assert!(files.contains(&root.join("dev-null")));
        assert!(!is_regular_file(root.join("dev-null")));
    }
}
