use std::fmt::{self, Display, Write as _};
use std::io;
use std::mem;

use logstream_sink::LineSink;

use super::PrefixLogger;
use crate::error::Result;
use crate::header;

impl<C> PrefixLogger<C> {
    /// Renders the header the next line would start with.
    ///
    /// Has no side effects apart from querying the time source when time
    /// annotation is enabled.
    #[must_use]
    pub fn render_header(&self) -> String {
        let mut out = String::new();
        self.write_header_into(&mut out);
        out
    }

    fn write_header_into(&self, out: &mut String) {
        let elapsed = self
            .log_execution_time
            .then(|| self.time_source.elapsed());
        header::write_header(out, &self.prefixes, elapsed);
    }
}

impl<C> PrefixLogger<C>
where
    C: LineSink,
{
    /// Appends `value` to the current line.
    ///
    /// If the previous call finished a line, the header is written first. The
    /// header and the value go to the console when the current depth is within
    /// the console limit, and to the file sink when one is attached and the
    /// depth is within the file limit. A failing console does not keep the
    /// text from the file sink. The pending header is consumed even if
    /// neither sink receives anything.
    ///
    /// Returns the logger so writes can be chained on one line.
    ///
    /// # Errors
    ///
    /// Returns [`LogStreamError::Io`](crate::LogStreamError::Io) when the
    /// value's `Display` impl fails; nothing is emitted and a pending header
    /// stays pending. Otherwise every eligible sink is written and the first
    /// sink failure is returned.
    pub fn write<T>(&mut self, value: T) -> Result<&mut Self>
    where
        T: Display,
    {
        let mut text = mem::take(&mut self.scratch);
        text.clear();

        if self.pending_header {
            self.write_header_into(&mut text);
        }
        if write!(text, "{value}").is_err() {
            self.scratch = text;
            return Err(io::Error::other("value formatting failed").into());
        }
        self.pending_header = false;

        let result = self.emit_text(&text);
        self.scratch = text;
        result.map(|()| self)
    }

    /// Finishes the current line.
    ///
    /// A line break goes to every sink whose depth limit admits the current
    /// depth. The next write starts with a header regardless of whether any
    /// sink received the break.
    ///
    /// # Errors
    ///
    /// Both sinks are attempted even if the console fails; the console's
    /// error is reported first.
    pub fn terminate_line(&mut self) -> Result<()> {
        self.pending_header = true;

        let depth = self.depth();
        let console = if self.console_enabled(depth) {
            self.console.write_line_break()
        } else {
            Ok(())
        };
        let file_enabled = self.file_enabled(depth);
        let file = match self.file.as_mut() {
            Some(file) if file_enabled => file.write_line_break(),
            _ => Ok(()),
        };
        Ok(console.and(file)?)
    }

    /// Writes `value` and finishes the line.
    ///
    /// # Errors
    ///
    /// Propagates the first sink failure.
    pub fn write_line<T>(&mut self, value: T) -> Result<()>
    where
        T: Display,
    {
        self.write(value)?;
        self.terminate_line()
    }

    /// Flushes the console and, if attached, the file sink.
    ///
    /// # Errors
    ///
    /// Both sinks are flushed; the console's error is reported first.
    pub fn flush(&mut self) -> Result<()> {
        let console = self.console.flush();
        let file = self.file.as_mut().map_or(Ok(()), |file| file.flush());
        Ok(console.and(file)?)
    }

    fn emit_text(&mut self, text: &str) -> Result<()> {
        let depth = self.depth();
        let console = if self.console_enabled(depth) {
            self.console.write_text(text)
        } else {
            Ok(())
        };
        let file_enabled = self.file_enabled(depth);
        let file = match self.file.as_mut() {
            Some(file) if file_enabled => file.write_text(text),
            _ => Ok(()),
        };
        Ok(console.and(file)?)
    }
}

/// Routes formatted output through [`PrefixLogger::write`].
///
/// Sink failures surface as [`fmt::Error`]; use [`PrefixLogger::write`]
/// directly to observe the underlying I/O error.
impl<C> fmt::Write for PrefixLogger<C>
where
    C: LineSink,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}
