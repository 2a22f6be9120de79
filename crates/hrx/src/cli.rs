use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use hrx_core::Options;

use crate::error::CliError;

pub const USAGE_BRIEF: &str = "usage: hrx [options] <-l|-c|-x> -f <archive> [pathnames...]
       hrx --help
       hrx --list -f existing.hrx
       hrx --create -f new.hrx <path> [paths...]
       hrx --extract -f existing.hrx [pathnames...]";

const LONG_ABOUT: &str = "\
Like tar, except that the archives are plain text.

An HRX archive keeps many text files in one human-readable file, handy for
test fixtures and other places where a pile of small files gets in the way.
Format details: https://github.com/google/hrx

Examples:

  # list the contents of custom-name.hrx
  hrx -lf custom-name.hrx

  # archive every files.* into custom-name.hrx
  hrx -cf custom-name.hrx files.*

  # extract custom-name.hrx into ./custom-name
  hrx -xf custom-name.hrx";

#[derive(Clone, Debug, Parser)]
#[command(
    name = "hrx",
    version,
    about = "Human-readable archive (.hrx) utility",
    long_about = LONG_ABOUT,
    disable_help_flag = true
)]
pub struct Cli {
    /// List archive entries
    #[arg(short, long, help_heading = "Operations")]
    pub list: bool,
    /// Create a new archive
    #[arg(short, long, help_heading = "Operations")]
    pub create: bool,
    /// Extract an existing archive
    #[arg(short = 'x', long, help_heading = "Operations")]
    pub extract: bool,

    /// Archive file
    #[arg(short = 'f', long = "archive", value_name = "FILE", help_heading = "Settings")]
    pub archive: Option<PathBuf>,
    /// Output directory for --extract
    #[arg(short = 'o', long = "directory", value_name = "DIR", help_heading = "Settings")]
    pub directory: Option<PathBuf>,
    /// Include hidden files and directories
    #[arg(short = 'a', long = "all", help_heading = "Settings")]
    pub all: bool,
    /// Recurse into directories, use --recurse=false to turn off
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Settings"
    )]
    pub recurse: Option<bool>,
    /// Remove the top directory from all pathnames
    #[arg(short = 'P', long = "prune-dir", help_heading = "Settings")]
    pub prune_dir: bool,
    /// Trim a literal prefix from all pathnames
    #[arg(
        short = 'T',
        long = "trim-prefix",
        value_name = "PREFIX",
        help_heading = "Settings"
    )]
    pub trim_prefix: Option<String>,
    /// Keep empty directories as entries
    #[arg(short, long = "keep-empty", help_heading = "Settings")]
    pub keep_empty: bool,
    /// Entry boundary width
    #[arg(
        short,
        long,
        value_name = "WIDTH",
        allow_negative_numbers = true,
        help_heading = "Settings"
    )]
    pub boundary: Option<i64>,

    /// Print summaries and progress
    #[arg(short, long)]
    pub verbose: bool,
    /// Show brief usage
    #[arg(short = 'h', long)]
    pub usage: bool,
    /// Show detailed help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Inputs for --create, pathname filters for --list and --extract
    #[arg(value_name = "PATHNAMES")]
    pub paths: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    List,
    Create,
    Extract,
}

impl Cli {
    pub fn mode(&self) -> Result<Mode, CliError> {
        match (self.list, self.create, self.extract) {
            (false, false, false) => Err(CliError::MissingMode),
            (true, false, false) => Ok(Mode::List),
            (false, true, false) => Ok(Mode::Create),
            (false, false, true) => Ok(Mode::Extract),
            _ => Err(CliError::ConflictingModes),
        }
    }

    /// Whether anything beyond positional pathnames was given, counting
    /// settings passed with their default value.
    pub fn has_flags(&self) -> bool {
        self.list
            || self.create
            || self.extract
            || self.archive.is_some()
            || self.directory.is_some()
            || self.all
            || self.recurse.is_some()
            || self.prune_dir
            || self.trim_prefix.is_some()
            || self.keep_empty
            || self.boundary.is_some()
            || self.verbose
    }

    pub fn archive(&self) -> Result<&Path, CliError> {
        self.archive.as_deref().ok_or(CliError::MissingArchive)
    }

    /// The `-f` archive, which has to be an existing file.
    pub fn existing_archive(&self) -> Result<&Path, CliError> {
        let archive = self.archive()?;
        if !archive.is_file() {
            return Err(CliError::ArchiveNotFound);
        }
        Ok(archive)
    }

    /// The `-o` directory, which has to exist when given.
    pub fn output_dir(&self) -> Result<Option<&Path>, CliError> {
        match self.directory.as_deref() {
            Some(dir) if !dir.is_dir() => Err(CliError::DirectoryNotFound),
            dir => Ok(dir),
        }
    }

    pub fn options(&self) -> Options {
        Options::default()
            .include_hidden(self.all)
            .recurse(self.recurse.unwrap_or(true))
            .boundary(self.boundary.unwrap_or(0))
            .prune_top_dir(self.prune_dir)
            .trim_prefix(self.trim_prefix.as_deref().unwrap_or_default())
            .keep_empty(self.keep_empty)
    }
}
