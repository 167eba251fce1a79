//! crates/logstream/src/macros.rs
//! Formatting shorthands that write one complete line.

/// Format a line and write it through a [`PrefixLogger`](crate::PrefixLogger).
///
/// Expands to a `write` of the formatted arguments followed by
/// `terminate_line`, and evaluates to the combined `Result`.
///
/// # Example
/// ```
/// use logstream::{logln, PrefixLogger, SharedBuffer, StreamSink};
///
/// let console = SharedBuffer::new();
/// let mut log = PrefixLogger::new(StreamSink::new(console.clone()));
/// log.push("cg");
/// logln!(log, "step {} residual {:.1e}", 3, 0.0016)?;
///
/// assert_eq!(console.contents(), "cg:step 3 residual 1.6e-3\n");
/// # Ok::<(), logstream::LogStreamError>(())
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr, $($arg:tt)*) => {
        $logger
            .write(::std::format_args!($($arg)*))
            .and_then(|logger| logger.terminate_line())
    };
}

/// Format a line and write it through this thread's default logger.
///
/// # Example
/// ```
/// use logstream::log_line;
///
/// logstream::thread_local::set_console_depth(0);
/// log_line!("assembled {} cells", 4096)?;
/// # Ok::<(), logstream::LogStreamError>(())
/// ```
#[macro_export]
macro_rules! log_line {
    ($($arg:tt)*) => {
        $crate::thread_local::write_line(::std::format_args!($($arg)*))
    };
}
