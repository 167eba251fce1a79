use std::fmt;

use crate::line_ending::LineEnding;

/// Line sink that writes into an [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with the [`LineEnding`] it
/// emits when a line is finished. Every terminator is followed by a flush of
/// the writer, so a line that has been ended is visible on a terminal or in a
/// file even if the process aborts afterwards. Text written between
/// terminators is passed straight through.
///
/// # Examples
///
/// Collect two lines into a [`Vec<u8>`]:
///
/// ```
/// use logstream_sink::{LineSink, StreamSink};
///
/// let mut sink = StreamSink::new(Vec::new());
/// sink.write_text("solve:")?;
/// sink.write_text("converged")?;
/// sink.write_line_break()?;
///
/// assert_eq!(sink.into_inner(), b"solve:converged\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Use Windows line endings:
///
/// ```
/// use logstream_sink::{LineEnding, LineSink, StreamSink};
///
/// let mut sink = StreamSink::with_line_ending(Vec::new(), LineEnding::CrLf);
/// sink.write_text("ready")?;
/// sink.write_line_break()?;
///
/// assert_eq!(sink.into_inner(), b"ready\r\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct StreamSink<W> {
    writer: W,
    line_ending: LineEnding,
}

mod constructors;
mod mapping;
mod writing;

impl<W> StreamSink<W> {
    /// Returns the current [`LineEnding`].
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Updates the [`LineEnding`] used for subsequent terminators.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W> fmt::Debug for StreamSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSink")
            .field("writer", &self.writer)
            .field("line_ending", &self.line_ending)
            .finish()
    }
}
