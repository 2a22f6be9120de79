use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::path::validate;
use crate::report::{Event, Reporter};

/// Boundary width used when none is given.
pub const DEFAULT_BOUNDARY: usize = 5;

/// An in-memory HRX archive bound to a file path.
pub struct Archive {
    path: PathBuf,
    comment: Option<String>,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    boundary: usize,
    reporter: Option<Arc<dyn Reporter>>,
}

impl fmt::Debug for Archive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Archive")
            .field("path", &self.path)
            .field("comment", &self.comment)
            .field("entries", &self.entries)
            .field("boundary", &self.boundary)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}

impl Archive {
    pub fn new(path: impl Into<PathBuf>, comment: Option<&str>) -> Self {
        Self {
            path: path.into(),
            comment: comment.map(str::to_string),
            entries: Vec::new(),
            index: HashMap::new(),
            boundary: DEFAULT_BOUNDARY,
            reporter: None,
        }
    }

    pub(crate) fn with_boundary(path: PathBuf, boundary: usize) -> Self {
        Self {
            boundary,
            ..Self::new(path, None)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pathnames in insertion order.
    pub fn list(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::pathname).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn entry(&self, pathname: &str) -> Option<&Entry> {
        self.index.get(pathname).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, pathname: &str) -> bool {
        self.index.contains_key(pathname)
    }

    /// Body and comment of an entry.
    pub fn get(&self, pathname: &str) -> Option<(&str, Option<&str>)> {
        self.entry(pathname).map(|e| (e.body(), e.comment()))
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<&str>) {
        self.comment = comment.map(str::to_string);
        if let Some(comment) = comment {
            self.fit_boundary(comment);
        }
    }

    pub fn boundary(&self) -> usize {
        self.boundary
    }

    /// Change the boundary width. It still grows past `width` if a body
    /// would collide with the shorter marker.
    pub fn set_boundary(&mut self, width: usize) -> Result<()> {
        if width == 0 {
            return Err(Error::InvalidBoundaryWidth(width));
        }
        self.boundary = width;
        if self.any_conflict() {
            self.widen();
        }
        Ok(())
    }

    pub fn set_reporter(&mut self, reporter: Arc<dyn Reporter>) {
        self.reporter = Some(reporter);
    }

    /// Insert or replace an entry. A pathname ending in `/` is a directory
    /// and must come with an empty body.
    pub fn set(&mut self, pathname: &str, body: &str, comment: Option<&str>) -> Result<()> {
        validate(pathname)?;
        if pathname.ends_with('/') && !body.trim_start_matches('\n').is_empty() {
            return Err(Error::DirectoryBody(pathname.to_string()));
        }

        let body = if pathname.ends_with('/') { "" } else { body };
        let comment = comment.map(str::to_string);

        match self.index.get(pathname) {
            Some(&i) => self.entries[i].replace(body.to_string(), comment.clone()),
            None => self.push(Entry::new(pathname.to_string(), body.to_string(), comment.clone())),
        }

        self.fit_boundary(body);
        if let Some(comment) = comment {
            self.fit_boundary(&comment);
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.index
            .insert(entry.pathname().to_string(), self.entries.len());
        self.entries.push(entry);
    }

    pub(crate) fn set_parsed_comment(&mut self, comment: String) {
        self.comment = Some(comment);
    }

    pub(crate) fn emit(&self, event: Event) {
        if let Some(reporter) = &self.reporter {
            reporter.report(&self.path, event);
        }
    }

    fn fit_boundary(&mut self, text: &str) {
        if conflicts(text, self.boundary) {
            self.widen();
        }
    }

    fn widen(&mut self) {
        let start = self.boundary;
        while self.any_conflict() {
            self.boundary += 1;
        }
        if self.boundary != start {
            tracing::debug!(
                archive = %self.path.display(),
                width = self.boundary,
                "widened boundary"
            );
            self.emit(Event::Boundary {
                width: self.boundary,
            });
        }
    }

    fn any_conflict(&self) -> bool {
        let width = self.boundary;
        self.comment.iter().any(|c| conflicts(c, width))
            || self.entries.iter().any(|e| {
                conflicts(e.body(), width) || e.comment().is_some_and(|c| conflicts(c, width))
            })
    }

    /// Serialize to HRX text.
    pub fn to_hrx(&self) -> String {
        let marker = marker(self.boundary);
        let mut parts = Vec::with_capacity(self.entries.len() + 1);
        for entry in &self.entries {
            if let Some(comment) = entry.comment() {
                parts.push(format!("{marker}\n{comment}"));
            }
            parts.push(format!("{marker} {}\n{}", entry.pathname(), entry.body()));
        }
        if let Some(comment) = &self.comment {
            parts.push(format!("{marker}\n{comment}"));
        }
        parts.join("\n")
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_hrx()).map_err(|e| Error::io(path, e))?;
        tracing::info!(archive = %path.display(), entries = self.len(), "wrote archive");
        Ok(())
    }
}

pub(crate) fn marker(width: usize) -> String {
    format!("<{}>", "=".repeat(width))
}

/// Whether `text` has a line starting with the boundary of `width`.
fn conflicts(text: &str, width: usize) -> bool {
    let marker = marker(width);
    text.starts_with(&marker) || text.contains(&format!("\n{marker}"))
}
