use std::path::Path;

use hrx_archive::Archive;
use indicatif::DecimalBytes;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::report::{Op, Report, ReportEntry};
use crate::sink::Sink;

const NO_COMMENT: &str = "-";

impl Report {
    /// Render the recorded rows as a table into `sink`.
    ///
    /// The header names `label`, the footer shows the size and name of
    /// `subject` (the archive for list/create, the output directory for
    /// extract). A comment column is added when the archive or any of the
    /// reported entries carries a comment.
    pub fn render(&self, archive: &Archive, label: &str, subject: &Path, sink: &mut dyn Sink) {
        let entries = self.entries();
        let rows: Vec<&ReportEntry> = entries
            .iter()
            .filter(|e| !matches!(e.op, Op::Boundary { .. }))
            .collect();

        let archive_comment = archive.comment().map(flatten).filter(|c| !c.is_empty());
        let with_comment = archive_comment.is_some()
            || rows
                .iter()
                .any(|e| entry_comment(archive, &e.pathname).is_some());

        let mut builder = Builder::default();

        let mut header = vec![label.to_uppercase(), "PATHNAME".to_string()];
        if with_comment {
            header.push("COMMENT".to_string());
        }
        builder.push_record(header);

        for entry in &rows {
            let mut record = vec![size_column(&entry.op), entry.pathname.clone()];
            if with_comment {
                record.push(
                    entry_comment(archive, &entry.pathname).unwrap_or_else(|| NO_COMMENT.into()),
                );
            }
            builder.push_record(record);
        }

        let mut footer = vec![
            DecimalBytes(subject_size(subject)).to_string(),
            basename(subject),
        ];
        if with_comment {
            footer.push(archive_comment.unwrap_or_else(|| NO_COMMENT.into()));
        }
        builder.push_record(footer);

        let mut table = builder.build();
        table
            .with(Style::psql())
            .modify(Columns::first(), Alignment::right());

        let rendered = table.to_string();
        let mut lines: Vec<&str> = rendered.lines().collect();
        // psql puts the header rule on line 1, reuse it above the footer
        if lines.len() >= 3 {
            let rule = lines[1];
            lines.insert(lines.len() - 1, rule);
        }
        for line in lines {
            sink.emit(line.trim_end());
        }
    }
}

fn size_column(op: &Op) -> String {
    let size = match op {
        Op::Listed { size } | Op::Appended { size } => *size,
        Op::Archived { source } if hrx_fs::is_dir(source) => 0,
        Op::Archived { source } => hrx_fs::file_size(source),
        Op::Extracted { target } | Op::Wrote { target } => hrx_fs::file_size(target),
        Op::DirectoryCreated { .. } => 0,
        other => return other.tag().to_string(),
    };
    DecimalBytes(size).to_string()
}

fn subject_size(subject: &Path) -> u64 {
    if hrx_fs::is_dir(subject) {
        hrx_fs::dir_size(subject)
    } else {
        hrx_fs::file_size(subject)
    }
}

fn basename(subject: &Path) -> String {
    subject
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| subject.display().to_string())
}

fn entry_comment(archive: &Archive, pathname: &str) -> Option<String> {
    archive
        .get(pathname)
        .and_then(|(_, comment)| comment)
        .map(flatten)
        .filter(|c| !c.is_empty())
}

fn flatten(comment: &str) -> String {
    comment.trim().replace('\n', "\\n")
}
