use super::StreamSink;
use crate::line_ending::LineEnding;
use std::io;

impl<W> StreamSink<W> {
    /// Creates a new sink that terminates lines with [`LineEnding::Lf`].
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_ending(writer, LineEnding::Lf)
    }

    /// Creates a sink with the provided [`LineEnding`].
    #[must_use]
    pub const fn with_line_ending(writer: W, line_ending: LineEnding) -> Self {
        Self {
            writer,
            line_ending,
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Consumes the sink and returns the writer and line ending.
    #[must_use]
    pub fn into_parts(self) -> (W, LineEnding) {
        (self.writer, self.line_ending)
    }
}

impl StreamSink<io::Stderr> {
    /// Creates a sink writing to the process's standard error stream.
    ///
    /// This is the default console destination of a prefix logger.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamSink<io::Stdout> {
    /// Creates a sink writing to the process's standard output stream.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> Default for StreamSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
