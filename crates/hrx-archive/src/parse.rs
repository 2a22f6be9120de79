use std::path::{Path, PathBuf};

use crate::archive::{Archive, DEFAULT_BOUNDARY, marker};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::path::validate;

impl Archive {
    /// Parse HRX text. `path` is the file the archive is bound to.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        if text.is_empty() {
            return Ok(Archive::with_boundary(path, DEFAULT_BOUNDARY));
        }

        let width = boundary_width(text).ok_or(Error::InvalidBoundary { line: 1 })?;
        let marker = marker(width);
        let mut archive = Archive::with_boundary(path, width);
        let mut pending_comment: Option<String> = None;

        let starts = boundary_starts(text, &marker);
        for (n, &start) in starts.iter().enumerate() {
            let line = line_number(text, start);
            let segment = match starts.get(n + 1) {
                // the newline in front of the next boundary is a separator
                Some(&next) => &text[start..next - 1],
                None => &text[start..],
            };
            let rest = &segment[marker.len()..];

            if rest.is_empty() || rest.starts_with('\n') {
                if pending_comment.is_some() {
                    return Err(Error::ConsecutiveComments { line });
                }
                pending_comment = Some(rest.strip_prefix('\n').unwrap_or(rest).to_string());
                continue;
            }

            let Some(header) = rest.strip_prefix(' ') else {
                return Err(Error::InvalidBoundary { line });
            };
            let (pathname, body) = header.split_once('\n').unwrap_or((header, ""));
            validate(pathname)?;
            if archive.contains(pathname) {
                return Err(Error::DuplicatePath(pathname.to_string()));
            }

            let body = if pathname.ends_with('/') {
                if !body.trim_matches('\n').is_empty() {
                    return Err(Error::DirectoryBody(pathname.to_string()));
                }
                ""
            } else {
                body
            };
            archive.push(Entry::new(
                pathname.to_string(),
                body.to_string(),
                pending_comment.take(),
            ));
        }

        if let Some(comment) = pending_comment {
            archive.set_parsed_comment(comment);
        }
        Ok(archive)
    }

    /// Read and parse an archive file.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &text)
    }
}

/// Width of the boundary opening the text, e.g. 3 for `<===>`.
fn boundary_width(text: &str) -> Option<usize> {
    let rest = text.strip_prefix('<')?;
    let width = rest.bytes().take_while(|&b| b == b'=').count();
    (width > 0 && rest[width..].starts_with('>')).then_some(width)
}

/// Byte offsets of every line that begins with `marker`.
fn boundary_starts(text: &str, marker: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let needle = format!("\n{marker}");
    let mut offset = 0;
    while let Some(found) = text[offset..].find(&needle) {
        let start = offset + found + 1;
        starts.push(start);
        offset = start;
    }
    starts
}

fn line_number(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
