/// A single named unit stored in an archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pathname: String,
    body: String,
    comment: Option<String>,
    kind: EntryKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl Entry {
    pub(crate) fn new(pathname: String, body: String, comment: Option<String>) -> Self {
        let kind = if pathname.ends_with('/') {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Self {
            pathname,
            body,
            comment,
            kind,
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    pub fn size(&self) -> u64 {
        self.body.len() as u64
    }

    pub(crate) fn replace(&mut self, body: String, comment: Option<String>) {
        self.body = body;
        self.comment = comment;
    }
}
