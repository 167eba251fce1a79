use std::fmt;
use std::io;

use logstream_sink::{LineSink, StreamSink};

use crate::time_source::TimeSource;

mod constructors;
mod scope;
mod sinks;
mod writing;

/// Logger that tags each line with the active scopes and routes it to up to two sinks.
///
/// The logger keeps a stack of scope labels. The first write after a line
/// terminator is preceded by a header built from that stack (`solve:iter:`),
/// optionally led by the elapsed process time. Every write is then sent to
/// the console sink and, if one is attached, to the file sink. Each sink has
/// its own depth limit: output is produced only while the number of active
/// scopes is at most that limit, so inner loops can be hidden from the
/// console while still being recorded in full to a file.
///
/// The logger is single-threaded. A shared instance has to be confined to
/// one thread (see [`crate::thread_local`]) or guarded so that push, write,
/// terminate and pop of one logical call sequence never interleave with
/// another's.
///
/// # Examples
///
/// ```
/// use logstream::PrefixLogger;
/// use logstream::{SharedBuffer, StreamSink};
///
/// let console = SharedBuffer::new();
/// let mut log = PrefixLogger::new(StreamSink::new(console.clone()));
///
/// log.push("solve");
/// log.push("iter");
/// log.write("residual=")?.write(1e-3)?;
/// log.terminate_line()?;
/// log.pop()?;
/// log.pop()?;
/// log.write("done")?;
///
/// assert_eq!(console.contents(), "solve:iter:residual=0.001\ndone");
/// # Ok::<(), logstream::LogStreamError>(())
/// ```
pub struct PrefixLogger<C = StreamSink<io::Stderr>> {
    prefixes: Vec<String>,
    console: C,
    file: Option<Box<dyn LineSink>>,
    pending_header: bool,
    console_depth: usize,
    file_depth: usize,
    log_execution_time: bool,
    time_source: Box<dyn TimeSource>,
    scratch: String,
}

impl<C> PrefixLogger<C> {
    /// Number of active scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.prefixes.len()
    }

    /// Active scope labels, outermost first.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Reports whether the next write starts a new line and will emit a header.
    #[must_use]
    pub const fn header_pending(&self) -> bool {
        self.pending_header
    }

    /// Approximate number of bytes used by this logger.
    ///
    /// Covers the struct itself, the prefix stack's storage and label
    /// contents, and the formatting buffer. Sink internals and allocator
    /// overhead are not included, so the value is an estimate.
    #[must_use]
    pub fn estimated_memory_usage(&self) -> usize {
        let labels: usize = self.prefixes.iter().map(String::capacity).sum();
        size_of::<Self>()
            + self.prefixes.capacity() * size_of::<String>()
            + labels
            + self.scratch.capacity()
    }
}

impl<C> fmt::Debug for PrefixLogger<C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixLogger")
            .field("prefixes", &self.prefixes)
            .field("console", &self.console)
            .field("file_attached", &self.file.is_some())
            .field("pending_header", &self.pending_header)
            .field("console_depth", &self.console_depth)
            .field("file_depth", &self.file_depth)
            .field("log_execution_time", &self.log_execution_time)
            .finish_non_exhaustive()
    }
}
