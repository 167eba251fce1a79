use super::StreamSink;
use std::mem;

impl<W> StreamSink<W> {
    /// Maps the sink's writer into a different type while preserving the [`LineEnding`](crate::LineEnding).
    ///
    /// Typical use is wrapping an existing file writer in a
    /// [`BufWriter`](std::io::BufWriter) without rebuilding the sink
    /// configuration.
    #[must_use]
    pub fn map_writer<F, W2>(self, f: F) -> StreamSink<W2>
    where
        F: FnOnce(W) -> W2,
    {
        let Self {
            writer,
            line_ending,
        } = self;
        StreamSink::with_line_ending(f(writer), line_ending)
    }

    /// Replaces the underlying writer while keeping the sink's [`LineEnding`](crate::LineEnding).
    ///
    /// The previous writer is returned so output produced before the switch
    /// can be inspected or flushed before it is dropped.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}

#[cfg(test)]
mod tests {
    use crate::{LineEnding, LineSink, StreamSink};
    use std::io::Cursor;

    #[test]
    fn map_writer_keeps_line_ending() {
        let sink = StreamSink::with_line_ending(Vec::new(), LineEnding::CrLf);
        let mut mapped = sink.map_writer(Cursor::new);
        mapped.write_text("a").expect("write succeeds");
        mapped.write_line_break().expect("write succeeds");

        assert_eq!(mapped.line_ending(), LineEnding::CrLf);
        assert_eq!(mapped.into_inner().into_inner(), b"a\r\n".to_vec());
    }

    #[test]
    fn replace_writer_returns_previous_output() {
        let mut sink = StreamSink::new(Vec::new());
        sink.write_text("before").expect("write succeeds");

        let previous = sink.replace_writer(Vec::new());
        sink.write_text("after").expect("write succeeds");

        assert_eq!(previous, b"before".to_vec());
        assert_eq!(sink.into_inner(), b"after".to_vec());
    }
}
