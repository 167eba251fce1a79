#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logstream-sink/src/lib.rs
//!
//! # Overview
//!
//! `logstream-sink` provides the destinations a prefix logger writes into.
//! A destination only needs two capabilities: append a piece of text and
//! append a line terminator. Those are captured by the [`LineSink`] trait so
//! the logger can fan a single logical line out to a console, a log file, or
//! an in-memory buffer without knowing which is which.
//!
//! # Design
//!
//! The crate exposes [`StreamSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor that knows which [`LineEnding`] to emit and
//! flushes after each terminator, matching the behaviour of a stream `endl`.
//! [`SharedBuffer`] is a cloneable in-memory writer whose clones share the
//! same storage, letting callers hand one handle to a logger and keep
//! another for inspection.
//!
//! # Invariants
//!
//! - Text is written verbatim; sinks never insert separators of their own.
//! - Line terminators are only produced by [`LineSink::write_line_break`].
//! - `LineEnding::Lf` is the default terminator.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer unchanged.
//!
//! # Examples
//!
//! Stream two lines into a shared buffer and inspect the output:
//!
//! ```
//! use logstream_sink::{LineSink, SharedBuffer, StreamSink};
//!
//! let buffer = SharedBuffer::new();
//! let mut sink = StreamSink::new(buffer.clone());
//!
//! sink.write_text("solve: started").unwrap();
//! sink.write_line_break().unwrap();
//! sink.write_text("solve: done").unwrap();
//!
//! assert_eq!(buffer.contents(), "solve: started\nsolve: done");
//! ```
//!
//! # See also
//!
//! - `logstream` crate for the prefix-stack logger that drives these sinks.

mod line_ending;
mod shared_buffer;
mod sink;

pub use line_ending::LineEnding;
pub use shared_buffer::SharedBuffer;
pub use sink::{LineSink, StreamSink};
