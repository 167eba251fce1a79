use std::io;
use std::mem;

use logstream_sink::StreamSink;

use super::PrefixLogger;
use crate::config::{LogStreamConfig, UNLIMITED_DEPTH};
use crate::time_source::{CpuTime, TimeSource};

impl<C> PrefixLogger<C> {
    /// Creates a logger writing to `console`, with no file sink and no depth limits.
    ///
    /// Time annotation uses [`CpuTime`] once enabled.
    #[must_use]
    pub fn new(console: C) -> Self {
        Self::with_time_source(console, CpuTime::new())
    }

    /// Creates a logger that reads header timestamps from `time_source`.
    #[must_use]
    pub fn with_time_source<T>(console: C, time_source: T) -> Self
    where
        T: TimeSource + 'static,
    {
        Self {
            prefixes: Vec::new(),
            console,
            file: None,
            pending_header: true,
            console_depth: UNLIMITED_DEPTH,
            file_depth: UNLIMITED_DEPTH,
            log_execution_time: false,
            time_source: Box::new(time_source),
            scratch: String::new(),
        }
    }

    /// Creates a logger writing to `console` with the limits from `config`.
    #[must_use]
    pub fn from_config(console: C, config: &LogStreamConfig) -> Self {
        let mut logger = Self::new(console);
        logger.apply_config(config);
        logger
    }

    /// Replaces the source used for header timestamps.
    pub fn set_time_source<T>(&mut self, time_source: T)
    where
        T: TimeSource + 'static,
    {
        self.time_source = Box::new(time_source);
    }

    /// Replaces the console sink, returning the previous one.
    ///
    /// Scopes, depth limits and the pending-header state are kept.
    #[must_use = "the returned sink holds output produced before the replacement"]
    pub fn replace_console(&mut self, console: C) -> C {
        mem::replace(&mut self.console, console)
    }

    /// Consumes the logger and returns the console sink.
    ///
    /// An attached file sink is dropped; [`detach`](Self::detach) it first to keep it.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }
}

impl PrefixLogger<StreamSink<io::Stderr>> {
    /// Creates a logger writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(StreamSink::stderr())
    }
}

impl Default for PrefixLogger<StreamSink<io::Stderr>> {
    fn default() -> Self {
        Self::stderr()
    }
}
