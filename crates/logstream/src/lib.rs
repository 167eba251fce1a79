#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logstream` provides [`PrefixLogger`], an execution log that tags every
//! line with the phase of the program that produced it. Callers push a label
//! when they enter a phase (a solver, a loop, an assembly step) and pop it
//! when they leave; each line is prefixed with the labels currently active,
//! joined by colons.
//!
//! # Design
//!
//! Output goes to a console sink (standard error by default) and, optionally,
//! to a second sink such as a log file. The two destinations are filtered
//! independently by nesting depth: a line is written to a sink only while the
//! number of active scopes is within that sink's limit. A typical setup keeps
//! the console restricted to the outer iterations and records everything in
//! the file.
//!
//! The header is emitted lazily, in front of the first value written after a
//! line terminator. A line assembled from several writes therefore carries a
//! single header, and a scope that writes nothing before being popped leaves
//! no trace.
//!
//! Sinks implement [`LineSink`] from the `logstream-sink` crate; the relevant
//! types are re-exported here.
//!
//! # Invariants
//!
//! - A sink receives output only while `depth <= limit` for that sink.
//!   A limit of `0` silences the sink entirely.
//! - The header for the stack `["a", "b"]` is `a:b:`; an empty stack has an
//!   empty header.
//! - Every line terminator arms the header for the next write, whether or
//!   not any sink received the terminator.
//! - Popping an empty stack is an error and changes nothing.
//!
//! # Errors
//!
//! Operations return [`LogStreamError`]: [`LogStreamError::ScopeUnderflow`]
//! for unbalanced pops, [`LogStreamError::NoSecondarySink`] when the file sink
//! is requested while detached, and [`LogStreamError::Io`] for sink failures.
//!
//! # Examples
//!
//! Keep the console to the outer loop and record everything in a file:
//!
//! ```
//! use logstream::{PrefixLogger, SharedBuffer, StreamSink};
//!
//! let console = SharedBuffer::new();
//! let file = SharedBuffer::new();
//!
//! let mut log = PrefixLogger::new(StreamSink::new(console.clone()));
//! log.attach(StreamSink::new(file.clone()));
//! log.set_console_depth(1);
//!
//! log.push("newton");
//! for step in 0..2 {
//!     log.push("cg");
//!     log.write_line(format_args!("step {step}"))?;
//!     log.pop()?;
//!     log.write_line("converged")?;
//! }
//! log.pop()?;
//!
//! assert_eq!(console.contents(), "newton:converged\nnewton:converged\n");
//! assert_eq!(
//!     file.contents(),
//!     "newton:cg:step 0\nnewton:converged\nnewton:cg:step 1\nnewton:converged\n"
//! );
//! # Ok::<(), logstream::LogStreamError>(())
//! ```
//!
//! # See also
//!
//! - [`thread_local`] for the per-thread default instance.
//! - [`LogStreamConfig`] for the textual configuration format.

mod config;
mod error;
mod guard;
pub mod header;
mod logger;
mod macros;
pub mod thread_local;
pub mod time_source;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ENV_VAR, LogStreamConfig, UNLIMITED_DEPTH};
pub use error::{ConfigError, LogStreamError, Result};
pub use guard::ScopeGuard;
pub use logger::PrefixLogger;
pub use logstream_sink::{LineEnding, LineSink, SharedBuffer, StreamSink};
pub use thread_local::DefaultLogger;
pub use time_source::{CpuTime, FixedTime, TimeSource, WallClock};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{PrefixLayer, init_tracing, init_tracing_with_filter};
