//! Line-oriented console output.
//!
//! [`Console`] wraps any [`Write`] sink. Every line written is:
//! 1. Terminated with a single `\n` and written to the sink
//! 2. Counted, so a run can report how many lines it produced
//! 3. Emitted as a `trace!` event for observability

use std::fmt::Display;
use std::io::Write;

use tracing::trace;

use hello_world_common::ProgramError;

/// Console that writes newline-terminated lines to a sink.
///
/// The binary wraps a locked stdout; tests wrap a `Vec<u8>` and read the
/// transcript back with [`Console::into_inner`].
pub struct Console<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> Console<W> {
    /// Create a new console writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Write `value` followed by a newline.
    pub fn println(&mut self, value: impl Display) -> Result<(), ProgramError> {
        writeln!(self.writer, "{value}")?;
        self.lines_written += 1;

        trace!(line = self.lines_written, output = %value, "Console line written");
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<(), ProgramError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Consume the console and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> std::fmt::Debug for Console<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("lines_written", &self.lines_written)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_println_appends_newline() {
        let mut console = Console::new(Vec::new());

        console.println("hello").unwrap();
        console.println(42).unwrap();

        assert_eq!(console.lines_written(), 2);
        assert_eq!(console.into_inner(), b"hello\n42\n");
    }

    #[test]
    fn test_new_console_is_empty() {
        let console = Console::new(Vec::new());

        assert_eq!(console.lines_written(), 0);
        assert!(console.into_inner().is_empty());
    }

    #[test]
    fn test_write_failure_is_not_counted() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut console = Console::new(Closed);
        let err = console.println("hello").unwrap_err();

        assert!(err.is_broken_pipe());
        assert_eq!(console.lines_written(), 0);
    }

    #[test]
    fn test_console_debug() {
        let console = Console::new(Vec::new());

        let debug_str = format!("{console:?}");
        assert!(debug_str.contains("Console"));
        assert!(debug_str.contains("lines_written"));
    }
}
