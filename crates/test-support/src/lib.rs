//! Shared test utilities for the logstream workspace.
//!
//! [`CapturedLogger`] pairs a [`PrefixLogger`] with in-memory console and
//! file buffers so tests can assert on exactly what each destination saw.

use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use logstream::{PrefixLogger, SharedBuffer, StreamSink};
use tempfile::TempDir;

/// Logger type whose console writes into a [`SharedBuffer`].
pub type BufferLogger = PrefixLogger<StreamSink<SharedBuffer>>;

/// A logger with observable console and file output.
pub struct CapturedLogger {
    logger: BufferLogger,
    console: SharedBuffer,
    file: SharedBuffer,
}

impl CapturedLogger {
    /// Logger with a captured console and no file sink attached.
    #[must_use]
    pub fn console_only() -> Self {
        let console = SharedBuffer::new();
        Self {
            logger: PrefixLogger::new(StreamSink::new(console.clone())),
            console,
            file: SharedBuffer::new(),
        }
    }

    /// Logger with both a captured console and a captured file sink attached.
    #[must_use]
    pub fn with_file() -> Self {
        let mut captured = Self::console_only();
        let previous = captured
            .logger
            .attach(StreamSink::new(captured.file.clone()));
        debug_assert!(previous.is_none());
        captured
    }

    /// Everything the console received so far.
    #[must_use]
    pub fn console_output(&self) -> String {
        self.console.contents()
    }

    /// Everything the file sink received so far.
    #[must_use]
    pub fn file_output(&self) -> String {
        self.file.contents()
    }

    /// Handle to the file buffer, for re-attaching after a detach.
    #[must_use]
    pub fn file_buffer(&self) -> SharedBuffer {
        self.file.clone()
    }
}

impl Deref for CapturedLogger {
    type Target = BufferLogger;

    fn deref(&self) -> &Self::Target {
        &self.logger
    }
}

impl DerefMut for CapturedLogger {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.logger
    }
}

/// Creates a temporary directory and the path of a log file inside it.
///
/// The directory is removed when the returned [`TempDir`] is dropped.
#[must_use]
pub fn temp_log_path(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    (dir, path)
}
