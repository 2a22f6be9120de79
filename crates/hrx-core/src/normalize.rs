//! Pathname normalization shared by create and extract.

use crate::options::Options;

const RELATIVE_MARKERS: [&str; 3] = ["/", "./", "../"];

/// Whether `input` starts with `/`, `./` or `../`.
pub fn has_relative_marker(input: &str) -> bool {
    RELATIVE_MARKERS.iter().any(|m| input.starts_with(m))
}

/// Remove one leading relative marker, if any.
pub fn strip_relative_marker(input: &str) -> &str {
    for marker in RELATIVE_MARKERS {
        if let Some(rest) = input.strip_prefix(marker) {
            return rest;
        }
    }
    input
}

/// Remove leading relative markers until none is left.
pub fn strip_relative_markers(input: &str) -> &str {
    let mut current = input;
    while has_relative_marker(current) {
        current = strip_relative_marker(current);
    }
    current
}

/// Canonical relative pathname of `raw` under `options`.
///
/// Relative markers are stripped first. With `prune_top_dir` the first
/// segment is dropped, then `trim_prefix` is removed as a literal string
/// followed by one leading `/`. Both rules only apply when the stripped
/// input had at least two segments, pruning first. The markers are
/// stripped again at the end since trimming can expose new ones.
pub fn normalize(raw: &str, options: &Options) -> String {
    let stripped = strip_relative_markers(raw);
    let segments: Vec<&str> = stripped.split('/').collect();
    let multi_segment = segments.len() >= 2;

    let mut pathname = stripped.to_string();
    if options.prune_top_dir && multi_segment {
        pathname = segments[1..].join("/");
    }
    if !options.trim_prefix.is_empty() && multi_segment {
        if let Some(rest) = pathname.strip_prefix(options.trim_prefix.as_str()) {
            pathname = rest.to_string();
        }
        if let Some(rest) = pathname.strip_prefix('/') {
            pathname = rest.to_string();
        }
    }

    strip_relative_markers(&pathname).to_string()
}

/// Normalize a directory pathname and mark it with a trailing `/`.
pub fn normalize_dir(raw: &str, options: &Options) -> String {
    let trimmed = raw.trim_end_matches('/');
    let mut pathname = normalize(trimmed, options);
    pathname.push('/');
    pathname
}

/// Pathname filter for list and extract. An empty filter selects all.
pub(crate) fn selection<S: AsRef<str>>(pathnames: &[S]) -> Vec<&str> {
    pathnames
        .iter()
        .map(|p| strip_relative_markers(p.as_ref()))
        .collect()
}

pub(crate) fn is_selected(selection: &[&str], pathname: &str) -> bool {
    selection.is_empty() || selection.contains(&pathname)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prune() -> Options {
        Options::default().prune_top_dir(true)
    }

    fn trim(prefix: &str) -> Options {
        Options::default().trim_prefix(prefix)
    }

    #[test]
    fn has_path_prefix() {
        assert!(!has_relative_marker(""));
        assert!(!has_relative_marker("nope"));
        assert!(has_relative_marker("/"));
        assert!(has_relative_marker("./"));
        assert!(has_relative_marker("../"));
        assert!(!has_relative_marker(".hidden/file"));
    }

    #[test]
    fn trim_path_prefix() {
        assert_eq!(strip_relative_marker(""), "");
        assert_eq!(strip_relative_marker("nope"), "nope");
        assert_eq!(strip_relative_marker("/"), "");
        assert_eq!(strip_relative_marker("./"), "");
        assert_eq!(strip_relative_marker("../"), "");
        assert_eq!(strip_relative_marker("../../a"), "../a");
    }

    #[test]
    fn trim_chained_prefixes() {
        assert_eq!(strip_relative_markers("././a"), "a");
        assert_eq!(strip_relative_markers("../../a"), "a");
        assert_eq!(strip_relative_markers("//.././a/b"), "a/b");
        assert_eq!(strip_relative_markers("..a"), "..a");
    }

    #[test]
    fn no_rules() {
        let options = Options::default();
        assert_eq!(normalize("", &options), "");
        assert_eq!(normalize("./dir/file", &options), "dir/file");
        assert_eq!(normalize("/abs/file", &options), "abs/file");
    }

    #[test]
    fn prune_top_dir() {
        assert_eq!(normalize("", &prune()), "");
        assert_eq!(normalize("nope", &prune()), "nope");
        assert_eq!(normalize("one/two", &prune()), "two");
        assert_eq!(normalize("/one/two", &prune()), "two");
        assert_eq!(
            normalize("files-in-directories/path/to/file2", &prune()),
            "path/to/file2"
        );
    }

    #[test]
    fn trim_prefix() {
        assert_eq!(normalize("path/name.txt", &trim("path")), "name.txt");
        assert_eq!(normalize("dir/file1", &trim("path")), "dir/file1");
        assert_eq!(normalize("path", &trim("path")), "path");
        assert_eq!(
            normalize("files-in-directories/dir/file1", &trim("files-in-directories")),
            "dir/file1"
        );
    }

    #[test]
    fn prune_then_trim() {
        let options = prune().trim_prefix("path");
        assert_eq!(normalize("files-in-directories/path/to/file2", &options), "to/file2");
        assert_eq!(normalize("files-in-directories/dir/file1", &options), "dir/file1");
    }

    #[test]
    fn trim_gate_counts_segments_before_pruning() {
        // "path/name.txt" has two segments, so trimming still runs on the
        // single segment left after pruning
        let options = prune().trim_prefix("name");
        assert_eq!(normalize("path/name.txt", &options), ".txt");
    }

    #[test]
    fn trimming_exposes_markers() {
        assert_eq!(normalize("x/../y/z", &trim("x/")), "y/z");
    }

    #[test]
    fn idempotent_once_markers_are_gone() {
        let options = Options::default();
        for raw in ["./a/b", "../../c", "/d", "e/f/g"] {
            let once = normalize(raw, &options);
            assert_eq!(normalize(&once, &options), once);
        }
    }

    #[test]
    fn directory_pathnames() {
        assert_eq!(normalize_dir("empty-dir", &Options::default()), "empty-dir/");
        assert_eq!(normalize_dir("./empty-dir/", &Options::default()), "empty-dir/");
        assert_eq!(normalize_dir("top/empty", &prune()), "empty/");
    }

    #[test]
    fn filters_ignore_relative_markers() {
        let filter = selection(&["./dir/file", "other"]);
        assert_eq!(filter, vec!["dir/file", "other"]);
        assert!(is_selected(&filter, "dir/file"));
        assert!(!is_selected(&filter, "dir"));
        assert!(is_selected(&[], "anything"));
    }
}
