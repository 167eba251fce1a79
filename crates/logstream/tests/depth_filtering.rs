//! Integration tests for per-sink depth filtering.
//!
//! These tests verify that the console and file sinks are gated
//! independently by `depth <= limit`, that a limit of zero silences a sink,
//! and that a detached sink is never written to.

use logstream::{StreamSink, UNLIMITED_DEPTH};
use test_support::CapturedLogger;

// ============================================================================
// Console Limits
// ============================================================================

/// Verifies default limits let every depth through.
#[test]
fn default_limits_are_unbounded() {
    let mut log = CapturedLogger::with_file();
    assert_eq!(log.console_depth(), UNLIMITED_DEPTH);
    assert_eq!(log.file_depth(), UNLIMITED_DEPTH);

    for level in 0..10 {
        log.push(level.to_string());
    }
    log.write_line("deep").unwrap();

    let expected = "0:1:2:3:4:5:6:7:8:9:deep\n";
    assert_eq!(log.console_output(), expected);
    assert_eq!(log.file_output(), expected);
}

/// Verifies a console limit of zero hides even top-level output.
#[test]
fn console_depth_zero_hides_everything() {
    let mut log = CapturedLogger::with_file();
    log.set_console_depth(0);

    log.write_line("top").unwrap();
    log.push("a");
    log.write_line("nested").unwrap();

    assert_eq!(log.console_output(), "");
    assert_eq!(log.file_output(), "top\na:nested\n");
}

/// Verifies a file limit of zero hides even top-level output.
#[test]
fn file_depth_zero_hides_everything() {
    let mut log = CapturedLogger::with_file();
    log.set_file_depth(0);

    log.write_line("top").unwrap();
    assert_eq!(log.console_output(), "top\n");
    assert_eq!(log.file_output(), "");
}

// ============================================================================
// Independent Filtering
// ============================================================================

/// Verifies deep output reaches the file but not the console.
#[test]
fn deep_scope_reaches_file_only() {
    let mut log = CapturedLogger::with_file();
    log.set_console_depth(1);
    log.set_file_depth(99);

    log.push("solve");
    log.push("iter");
    log.write("residual").unwrap();
    assert_eq!(log.console_output(), "");
    assert_eq!(log.file_output(), "solve:iter:residual");

    log.terminate_line().unwrap();
    log.pop().unwrap();
    log.write("norm").unwrap();
    assert_eq!(log.console_output(), "solve:norm");
    assert_eq!(log.file_output(), "solve:iter:residual\nsolve:norm");
}

/// Verifies the line break follows the same depth gate as the text.
#[test]
fn line_break_is_filtered_like_text() {
    let mut log = CapturedLogger::with_file();
    log.set_console_depth(0);
    log.write("x").unwrap();
    log.set_console_depth(UNLIMITED_DEPTH);
    log.terminate_line().unwrap();

    assert_eq!(log.console_output(), "\n");
    assert_eq!(log.file_output(), "x\n");
}

/// Verifies that raising a limit later does not replay suppressed output.
#[test]
fn suppressed_output_is_not_replayed() {
    let mut log = CapturedLogger::console_only();
    log.set_console_depth(0);
    log.write_line("lost").unwrap();
    log.set_console_depth(5);
    log.write_line("kept").unwrap();

    assert_eq!(log.console_output(), "kept\n");
}

// ============================================================================
// Attach / Detach
// ============================================================================

/// Verifies nothing goes to a file sink that was never attached.
#[test]
fn unattached_file_receives_nothing() {
    let mut log = CapturedLogger::console_only();
    log.write_line("console only").unwrap();
    assert_eq!(log.file_output(), "");
}

/// Verifies a detached sink is never touched again, even within its limit.
#[test]
fn detach_stops_file_output() {
    let mut log = CapturedLogger::with_file();
    log.write_line("first").unwrap();
    let detached = log.detach();
    assert!(detached.is_some());

    log.write_line("second").unwrap();
    assert_eq!(log.file_output(), "first\n");
    assert_eq!(log.console_output(), "first\nsecond\n");
}

/// Verifies re-attaching resumes file output under the existing limit.
#[test]
fn reattach_resumes_with_existing_limit() {
    let mut log = CapturedLogger::with_file();
    log.set_file_depth(1);
    let _ = log.detach();

    log.push("a");
    log.write_line("while detached").unwrap();

    let file = log.file_buffer();
    assert!(log.attach(StreamSink::new(file)).is_none());
    log.write_line("attached").unwrap();
    log.push("b");
    log.write_line("too deep").unwrap();

    assert_eq!(log.file_output(), "a:attached\n");
}
