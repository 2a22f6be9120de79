use std::io::Write;

/// Destination for rendered summary lines.
pub trait Sink {
    fn emit(&mut self, line: &str);
}

/// Drops every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Sink for Silent {
    fn emit(&mut self, _line: &str) {}
}

/// Writes each line, newline terminated, to any writer. Write errors are
/// ignored: a summary must never fail an operation.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{line}");
    }
}

impl Sink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_appends_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit("one");
        sink.emit("two");
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn vec_sink_collects() {
        let mut lines: Vec<String> = Vec::new();
        lines.emit("row");
        assert_eq!(lines, vec!["row".to_string()]);
    }

    #[test]
    fn silent_sink() {
        let mut sink = Silent;
        sink.emit("ignored");
    }
}
