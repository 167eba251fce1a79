use logstream_sink::LineSink;

use super::PrefixLogger;
use crate::config::LogStreamConfig;
use crate::error::{LogStreamError, Result};

impl<C> PrefixLogger<C> {
    /// Starts copying output to `sink`, subject to the file depth limit.
    ///
    /// A previously attached sink is handed back unflushed; closing it is the
    /// caller's business.
    pub fn attach<S>(&mut self, sink: S) -> Option<Box<dyn LineSink>>
    where
        S: LineSink + 'static,
    {
        self.file.replace(Box::new(sink))
    }

    /// Stops copying output to the file sink and returns it.
    ///
    /// Returns `None` if nothing was attached.
    pub fn detach(&mut self) -> Option<Box<dyn LineSink>> {
        self.file.take()
    }

    /// Reports whether a file sink is attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.file.is_some()
    }

    /// Borrows the console sink.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Mutably borrows the console sink.
    #[must_use]
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Mutably borrows the attached file sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogStreamError::NoSecondarySink`] when nothing is attached.
    pub fn file_stream(&mut self) -> Result<&mut dyn LineSink> {
        match self.file.as_deref_mut() {
            Some(sink) => Ok(sink),
            None => Err(LogStreamError::NoSecondarySink),
        }
    }

    /// Limits console output to lines written while at most `depth` scopes are active.
    ///
    /// `0` silences the console completely, even outside any scope.
    pub fn set_console_depth(&mut self, depth: usize) {
        self.console_depth = depth;
    }

    /// Limits file output to lines written while at most `depth` scopes are active.
    ///
    /// `0` silences the file sink completely, even outside any scope.
    pub fn set_file_depth(&mut self, depth: usize) {
        self.file_depth = depth;
    }

    /// Current console depth limit.
    #[must_use]
    pub const fn console_depth(&self) -> usize {
        self.console_depth
    }

    /// Current file depth limit.
    #[must_use]
    pub const fn file_depth(&self) -> usize {
        self.file_depth
    }

    /// Enables or disables the elapsed-time token at the start of each header.
    pub fn set_time_annotation(&mut self, enabled: bool) {
        self.log_execution_time = enabled;
    }

    /// Reports whether headers carry the elapsed-time token.
    #[must_use]
    pub const fn log_execution_time(&self) -> bool {
        self.log_execution_time
    }

    /// Applies depth limits and the time flag from `config`.
    pub fn apply_config(&mut self, config: &LogStreamConfig) {
        self.console_depth = config.console_depth;
        self.file_depth = config.file_depth;
        self.log_execution_time = config.log_execution_time;
    }

    /// Snapshot of the current limits and time flag.
    #[must_use]
    pub const fn config(&self) -> LogStreamConfig {
        LogStreamConfig {
            console_depth: self.console_depth,
            file_depth: self.file_depth,
            log_execution_time: self.log_execution_time,
        }
    }

    pub(super) const fn console_enabled(&self, depth: usize) -> bool {
        admits(self.console_depth, depth)
    }

    pub(super) const fn file_enabled(&self, depth: usize) -> bool {
        admits(self.file_depth, depth)
    }
}

/// A limit of zero switches the sink off; otherwise the check is inclusive.
const fn admits(limit: usize, depth: usize) -> bool {
    limit != 0 && depth <= limit
}
