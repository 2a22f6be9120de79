use std::path::Path;
use std::sync::Arc;

use hrx_archive::Archive;

use crate::error::{Error, Result};
use crate::normalize::{normalize, normalize_dir};
use crate::options::Options;
use crate::report::{Op, Report};
use crate::sink::Sink;

/// Build an archive from `inputs` and write it to `destination`.
///
/// Files that are not valid UTF-8 or not regular files are skipped and
/// show up as `skipped` rows. Any other failure discards the archive and
/// nothing is written.
pub fn create<P: AsRef<Path>>(
    options: &Options,
    destination: impl AsRef<Path>,
    inputs: &[P],
    report: &Report,
    sink: &mut dyn Sink,
) -> Result<Archive> {
    let destination = destination.as_ref();
    if inputs.is_empty() {
        return Err(Error::PathRequired);
    }
    if hrx_fs::exists(destination) && !hrx_fs::is_regular_file(destination) {
        return Err(Error::DestinationInvalid(destination.to_path_buf()));
    }

    report.reset();

    let mut builder = Builder::new(options, destination, report)?;
    for input in inputs {
        builder.add_input(input.as_ref())?;
    }
    let archive = builder.archive;

    archive.write_file(destination)?;
    tracing::info!(
        archive = %destination.display(),
        entries = archive.len(),
        "created archive"
    );
    report.render(&archive, "archived", destination, sink);
    Ok(archive)
}

struct Builder<'a> {
    options: &'a Options,
    report: &'a Report,
    source: String,
    archive: Archive,
}

impl<'a> Builder<'a> {
    fn new(options: &'a Options, destination: &Path, report: &'a Report) -> Result<Self> {
        let mut archive = Archive::new(destination, None);
        archive.set_reporter(Arc::new(report.clone()));
        archive.set_boundary(options.boundary_width())?;
        Ok(Self {
            options,
            report,
            source: destination.display().to_string(),
            archive,
        })
    }

    fn add_input(&mut self, input: &Path) -> Result<()> {
        if hrx_fs::is_dir(input) {
            self.add_dir(input)
        } else if hrx_fs::is_regular_file(input) {
            self.add_file(input)
        } else if !hrx_fs::exists(input) {
            Err(Error::FileNotFound(input.to_path_buf()))
        } else {
            Err(Error::InvalidInput(input.to_path_buf()))
        }
    }

    fn add_dir(&mut self, dir: &Path) -> Result<()> {
        let files = if self.options.recurse {
            hrx_fs::list_all_files(dir, self.options.include_hidden)?
        } else {
            hrx_fs::list_files(dir, self.options.include_hidden)?
        };

        if !files.is_empty() {
            return files.iter().try_for_each(|file| self.add_file(file));
        }
        if !self.options.keep_empty {
            tracing::debug!(dir = %dir.display(), "no files, skipped");
            return Ok(());
        }

        let raw = dir.to_str().ok_or_else(|| Error::InvalidUnicode(dir.to_path_buf()))?;
        let pathname = normalize_dir(raw, self.options);
        if pathname
            .trim_end_matches('/')
            .split('/')
            .any(|part| matches!(part, "" | "." | ".."))
        {
            tracing::debug!(dir = %dir.display(), %pathname, "no entry for a relative directory");
            return Ok(());
        }
        self.set(&pathname, "", dir)
    }

    fn add_file(&mut self, file: &Path) -> Result<()> {
        match read_entry(file, self.options) {
            Ok((pathname, body)) => self.set(&pathname, &body, file),
            Err(err) if err.is_ignorable() => {
                tracing::warn!(file = %file.display(), "skipped: {err}");
                let pathname = file.to_string_lossy();
                self.report.record(
                    self.source.as_str(),
                    normalize(&pathname, self.options),
                    Op::Skipped {
                        reason: err.to_string(),
                    },
                );
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn set(&mut self, pathname: &str, body: &str, source: &Path) -> Result<()> {
        let replaced = self.archive.contains(pathname);
        self.archive.set(pathname, body, None)?;

        let op = if replaced {
            tracing::debug!(pathname, source = %source.display(), "replaced entry");
            Op::Appended {
                size: body.len() as u64,
            }
        } else {
            tracing::debug!(pathname, source = %source.display(), "added entry");
            Op::Archived {
                source: source.to_path_buf(),
            }
        };
        self.report.record(self.source.as_str(), pathname, op);
        Ok(())
    }
}

/// Normalized pathname and text body of a file on disk.
fn read_entry(file: &Path, options: &Options) -> Result<(String, String)> {
    if !hrx_fs::is_regular_file(file) {
        return Err(Error::NotRegular(file.to_path_buf()));
    }
    let raw = file
        .to_str()
        .ok_or_else(|| Error::InvalidUnicode(file.to_path_buf()))?;
    let bytes = std::fs::read(file).map_err(|source| Error::ReadFailed {
        path: file.to_path_buf(),
        source,
    })?;
    let body = String::from_utf8(bytes).map_err(|_| Error::InvalidUnicode(file.to_path_buf()))?;
    Ok((normalize(raw, options), body))
}
