use hrx_archive::DEFAULT_BOUNDARY;

/// Settings for one create, extract or list call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Include dotfiles and dot-directories while walking.
    pub include_hidden: bool,
    /// Walk directories recursively.
    pub recurse: bool,
    /// Boundary width, non-positive means the archive default.
    pub boundary: i64,
    /// Drop the first segment of multi-segment pathnames.
    pub prune_top_dir: bool,
    /// Literal prefix removed from multi-segment pathnames.
    pub trim_prefix: String,
    /// Record a directory marker for inputs that yield no files.
    pub keep_empty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_hidden: false,
            recurse: true,
            boundary: 0,
            prune_top_dir: false,
            trim_prefix: String::new(),
            keep_empty: false,
        }
    }
}

impl Options {
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    pub fn boundary(mut self, boundary: i64) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn prune_top_dir(mut self, prune_top_dir: bool) -> Self {
        self.prune_top_dir = prune_top_dir;
        self
    }

    pub fn trim_prefix(mut self, trim_prefix: impl Into<String>) -> Self {
        self.trim_prefix = trim_prefix.into();
        self
    }

    pub fn keep_empty(mut self, keep_empty: bool) -> Self {
        self.keep_empty = keep_empty;
        self
    }

    /// Boundary width, always positive. Zero and negative widths fall back
    /// to the default.
    pub fn boundary_width(&self) -> usize {
        if self.boundary <= 0 {
            DEFAULT_BOUNDARY
        } else {
            self.boundary as usize
        }
    }

    /// Whether extraction has to rewrite pathnames.
    pub fn rewrites_pathnames(&self) -> bool {
        self.prune_top_dir || !self.trim_prefix.is_empty()
    }
}
