use std::io;

mod stream_sink;

pub use stream_sink::StreamSink;

/// A destination that accepts text and line terminators.
///
/// This is the whole contract a prefix logger relies on: it appends rendered
/// values with [`write_text`](Self::write_text) and finishes lines with
/// [`write_line_break`](Self::write_line_break). Implementors decide what a
/// line break looks like and whether it implies a flush.
///
/// The trait is object safe so a logger can hold heterogeneous destinations
/// as `Box<dyn LineSink>`.
pub trait LineSink {
    /// Appends `text` verbatim.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Appends a line terminator.
    fn write_line_break(&mut self) -> io::Result<()>;

    /// Flushes any buffered output. The default does nothing.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S> LineSink for &mut S
where
    S: LineSink + ?Sized,
{
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn write_line_break(&mut self) -> io::Result<()> {
        (**self).write_line_break()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S> LineSink for Box<S>
where
    S: LineSink + ?Sized,
{
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn write_line_break(&mut self) -> io::Result<()> {
        (**self).write_line_break()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
