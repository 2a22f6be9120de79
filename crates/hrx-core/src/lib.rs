//! Create, extract and list HRX archives.
//!
//! Wraps [`hrx_archive`] with what a command line archiver needs: pathname
//! normalization (relative markers, top directory pruning, prefix
//! trimming), directory walking with skip rules for unusable files, and a
//! per-operation [`Report`] rendered as a summary table into a [`Sink`].
//!
//! # Example
//!
//! ```no_run
//! use hrx_core::{Options, Report, Silent, create, list};
//!
//! let report = Report::new();
//! let options = Options::default().prune_top_dir(true);
//! create(&options, "site.hrx", &["site"], &report, &mut Silent)?;
//!
//! let mut lines: Vec<String> = Vec::new();
//! list("site.hrx", &[] as &[&str], &report, &mut lines)?;
//! # Ok::<(), hrx_core::Error>(())
//! ```

mod create;
mod error;
mod extract;
mod list;
mod normalize;
mod options;
mod report;
mod sink;
mod summary;

pub use create::create;
pub use error::{Error, Result};
pub use extract::{default_destination, extract};
pub use list::list;
pub use normalize::{
    has_relative_marker, normalize, normalize_dir, strip_relative_marker, strip_relative_markers,
};
pub use options::Options;
pub use report::{Op, Report, ReportEntry};
pub use sink::{Silent, Sink, WriterSink};

pub use hrx_archive::{Archive, DEFAULT_BOUNDARY};
