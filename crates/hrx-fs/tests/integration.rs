use std::fs;

use hrx_fs::{Error, dir_size, exists, list_all_files, list_files};
use tempfile::tempdir;

#[test]
fn test_listing_relative_to_given_root() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("files-in-directories");
    fs::create_dir_all(root.join("dir")).unwrap();
    fs::create_dir_all(root.join("path/to")).unwrap();
    fs::write(root.join("dir/file1"), "1").unwrap();
    fs::write(root.join("path/to/file2"), "22").unwrap();

    let files = list_all_files(&root, false).unwrap();
    assert_eq!(
        files,
        vec![root.join("dir/file1"), root.join("path/to/file2")]
    );
    assert!(list_files(&root, false).unwrap().is_empty());
    assert_eq!(dir_size(&root), 3);
}

#[test]
fn test_empty_directory() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty-dir");
    fs::create_dir(&empty).unwrap();

    assert!(exists(&empty));
    assert!(list_all_files(&empty, true).unwrap().is_empty());
    assert_eq!(dir_size(&empty), 0);
}

#[cfg(unix)]
#[test]
fn test_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("file"), "x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // privileged runners can read anything
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = list_all_files(dir.path(), false);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(result, Err(Error::PermissionDenied { .. })));
}
