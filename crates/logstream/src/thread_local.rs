//! crates/logstream/src/thread_local.rs
//! Per-thread default logger.
//!
//! Each thread owns one [`DefaultLogger`] writing to standard error. Keeping
//! the instance thread-local gives every thread its own prefix stack, so
//! scopes pushed on one thread never show up in headers written by another.
//! The free functions below are shorthands for [`with_log`].
//!
//! Calling any of these functions from inside a [`with_log`] closure panics,
//! because the logger is already mutably borrowed.

use std::cell::RefCell;
use std::fmt::Display;

use logstream_sink::{LineSink, StreamSink};

use crate::config::LogStreamConfig;
use crate::error::Result;
use crate::logger::PrefixLogger;

/// Logger type used for the per-thread instance.
pub type DefaultLogger = PrefixLogger<Box<dyn LineSink>>;

thread_local! {
    static LOG: RefCell<DefaultLogger> = RefCell::new(stderr_logger());
}

fn stderr_logger() -> DefaultLogger {
    PrefixLogger::new(Box::new(StreamSink::stderr()))
}

/// Runs `f` with exclusive access to this thread's logger.
///
/// # Panics
///
/// Panics when called re-entrantly from inside another `with_log` closure.
pub fn with_log<R>(f: impl FnOnce(&mut DefaultLogger) -> R) -> R {
    LOG.with(|log| f(&mut log.borrow_mut()))
}

/// Runs `f` if this thread's logger is free.
///
/// Returns `None` without calling `f` when the logger is already borrowed
/// further up the stack, or when the thread is being torn down.
pub fn try_with_log<R>(f: impl FnOnce(&mut DefaultLogger) -> R) -> Option<R> {
    LOG.try_with(|log| log.try_borrow_mut().ok().map(|mut log| f(&mut log)))
        .ok()
        .flatten()
}

/// Apply `config` to this thread's logger.
pub fn init(config: &LogStreamConfig) {
    with_log(|log| log.apply_config(config));
}

/// Replace this thread's logger with a fresh stderr logger.
///
/// The previous console and file sinks are dropped.
pub fn reset() {
    with_log(|log| *log = stderr_logger());
}

/// Enter a scope on this thread's logger.
pub fn push(label: impl Into<String>) {
    with_log(|log| log.push(label));
}

/// Leave the innermost scope on this thread's logger.
pub fn pop() -> Result<String> {
    with_log(PrefixLogger::pop)
}

/// Append `value` to the current line of this thread's logger.
pub fn write<T: Display>(value: T) -> Result<()> {
    with_log(|log| log.write(value).map(|_| ()))
}

/// Finish the current line of this thread's logger.
pub fn terminate_line() -> Result<()> {
    with_log(PrefixLogger::terminate_line)
}

/// Write `value` and finish the line on this thread's logger.
pub fn write_line<T: Display>(value: T) -> Result<()> {
    with_log(|log| log.write_line(value))
}

/// Attach a file sink to this thread's logger, returning the previous one.
pub fn attach<S>(sink: S) -> Option<Box<dyn LineSink>>
where
    S: LineSink + 'static,
{
    with_log(|log| log.attach(sink))
}

/// Detach the file sink from this thread's logger.
pub fn detach() -> Option<Box<dyn LineSink>> {
    with_log(PrefixLogger::detach)
}

/// Replace the console sink of this thread's logger, returning the previous one.
pub fn set_console<S>(sink: S) -> Box<dyn LineSink>
where
    S: LineSink + 'static,
{
    with_log(|log| log.replace_console(Box::new(sink)))
}

/// Set the console depth limit of this thread's logger.
pub fn set_console_depth(depth: usize) {
    with_log(|log| log.set_console_depth(depth));
}

/// Set the file depth limit of this thread's logger.
pub fn set_file_depth(depth: usize) {
    with_log(|log| log.set_file_depth(depth));
}

/// Toggle elapsed-time annotation on this thread's logger.
pub fn set_time_annotation(enabled: bool) {
    with_log(|log| log.set_time_annotation(enabled));
}

/// Current depth of this thread's logger.
pub fn depth() -> usize {
    with_log(|log| log.depth())
}
