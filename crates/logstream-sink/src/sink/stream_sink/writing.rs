use super::StreamSink;
use crate::sink::LineSink;
use std::io::{self, Write};

impl<W> LineSink for StreamSink<W>
where
    W: Write,
{
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.writer.write_all(text.as_bytes())
    }

    /// Writes the configured [`LineEnding`](crate::LineEnding) and flushes the writer.
    fn write_line_break(&mut self) -> io::Result<()> {
        self.writer.write_all(self.line_ending.as_bytes())?;
        self.writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
