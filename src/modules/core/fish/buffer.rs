//! Append-only script buffer

use std::io::Write;

use crate::Result;

/// Text of a completion script, built line by line and flushed once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionBuffer {
    text: String,
}

impl CompletionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line, adding the trailing newline
    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// Number of complete lines written so far
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Write the whole script to `sink` in a single call
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        sink.write_all(self.text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FishgenError;
    use std::io;

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_push_line_appends_newline() {
        let mut buffer = CompletionBuffer::new();
        buffer.push_line("a");
        buffer.push_line("b");
        assert_eq!(buffer.as_str(), "a\nb\n");
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_write_to_sink() {
        let mut buffer = CompletionBuffer::new();
        buffer.push_line("complete -c app");
        let mut out = Vec::new();
        buffer.write_to(&mut out).unwrap();
        assert_eq!(out, b"complete -c app\n");
    }

    #[test]
    fn test_write_failure_surfaces_io_error() {
        let mut buffer = CompletionBuffer::new();
        buffer.push_line("x");
        let err = buffer.write_to(&mut ClosedSink).unwrap_err();
        match err {
            FishgenError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }
}
