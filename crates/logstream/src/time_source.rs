//! crates/logstream/src/time_source.rs
//! Elapsed-time collaborators used for header time annotation.

use std::time::{Duration, Instant};

/// Supplies the elapsed time printed in front of each header.
///
/// The logger only queries the source while time annotation is enabled, once
/// per rendered header.
pub trait TimeSource {
    /// Time elapsed since the source's reference point.
    fn elapsed(&self) -> Duration;
}

impl<F> TimeSource for F
where
    F: Fn() -> Duration,
{
    fn elapsed(&self) -> Duration {
        self()
    }
}

/// User CPU time consumed by the current process.
///
/// On Unix this queries `getrusage(RUSAGE_SELF)`. Elsewhere, or if the call
/// fails, it falls back to wall-clock time since the source was created.
#[derive(Clone, Copy, Debug)]
pub struct CpuTime {
    created: Instant,
}

impl CpuTime {
    /// Creates a new source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            created: Instant::now(),
        }
    }
}

impl Default for CpuTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for CpuTime {
    fn elapsed(&self) -> Duration {
        user_cpu_time().unwrap_or_else(|| self.created.elapsed())
    }
}

#[cfg(unix)]
#[allow(unsafe_code)]
fn user_cpu_time() -> Option<Duration> {
    // SAFETY: rusage is plain old data, so the all-zero pattern is valid.
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    // SAFETY: getrusage only writes into the struct we pass by pointer.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, &raw mut usage) };
    if rc != 0 {
        return None;
    }

    let secs = u64::try_from(usage.ru_utime.tv_sec).ok()?;
    let micros = u32::try_from(usage.ru_utime.tv_usec).ok()?;
    Some(Duration::new(secs, micros.saturating_mul(1_000)))
}

#[cfg(not(unix))]
fn user_cpu_time() -> Option<Duration> {
    None
}

/// Wall-clock time since the source was created.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    started: Instant,
}

impl WallClock {
    /// Starts the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// A source that always reports the same duration.
///
/// Useful for reproducible output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedTime(pub Duration);

impl TimeSource for FixedTime {
    fn elapsed(&self) -> Duration {
        self.0
    }
}
