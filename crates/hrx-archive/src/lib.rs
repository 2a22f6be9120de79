//! Human-readable archives (HRX).
//!
//! HRX bundles many text files into one plain-text file:
//!
//! ```text
//! <===> input.scss
//! ul { margin-left: 1em; }
//!
//! <===> output.css
//! ul { margin-left: 1em; }
//! ```
//!
//! # Architecture
//!
//! - `archive.rs` - In-memory archive, entry editing, boundary management, writing
//! - `parse.rs` - HRX text parsing
//! - `extract.rs` - Writing entries to a directory
//! - `report.rs` - Events emitted to an attached [`Reporter`]
//!
//! # Example
//!
//! ```
//! use hrx_archive::Archive;
//!
//! let mut archive = Archive::new("notes.hrx", None);
//! archive.set("todo.txt", "buy milk\n", None).unwrap();
//! archive.set("done/", "", None).unwrap();
//!
//! let parsed = Archive::parse("notes.hrx", &archive.to_hrx()).unwrap();
//! assert_eq!(parsed.list(), vec!["todo.txt", "done/"]);
//! ```

pub use archive::{Archive, DEFAULT_BOUNDARY};
pub use entry::{Entry, EntryKind};
pub use error::{Error, Result};
pub use report::{Event, Reporter};

mod archive;
mod entry;
mod error;
mod extract;
mod parse;
mod path;
mod report;
