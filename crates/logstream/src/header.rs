//! crates/logstream/src/header.rs
//! Rendering of the per-line header from the prefix stack.
//!
//! A header is the optional elapsed-time token followed by every active
//! prefix in push order, each terminated by a colon. The stack `["a", "b"]`
//! renders as `a:b:` and an empty stack renders as the empty string. Time is
//! printed as fixed-point seconds with millisecond precision (`12.345:`).

use std::fmt::Write as _;
use std::time::Duration;

/// Separator written after every prefix and after the time token.
pub const SEPARATOR: char = ':';

/// Appends the colon-joined prefixes, with a trailing colon, to `out`.
pub fn write_prefixes<S>(out: &mut String, prefixes: &[S])
where
    S: AsRef<str>,
{
    for prefix in prefixes {
        out.push_str(prefix.as_ref());
        out.push(SEPARATOR);
    }
}

/// Appends a full header to `out`.
///
/// `elapsed` is `Some` when time annotation is enabled.
pub fn write_header<S>(out: &mut String, prefixes: &[S], elapsed: Option<Duration>)
where
    S: AsRef<str>,
{
    if let Some(elapsed) = elapsed {
        let _ = write!(out, "{:.3}{SEPARATOR}", elapsed.as_secs_f64());
    }
    write_prefixes(out, prefixes);
}

/// Renders the colon-joined prefixes into a new string.
///
/// # Examples
///
/// ```
/// use logstream::header::render_prefixes;
///
/// assert_eq!(render_prefixes(&["a", "b"]), "a:b:");
/// assert_eq!(render_prefixes::<&str>(&[]), "");
/// ```
#[must_use]
pub fn render_prefixes<S>(prefixes: &[S]) -> String
where
    S: AsRef<str>,
{
    let mut out = String::new();
    write_prefixes(&mut out, prefixes);
    out
}

/// Renders a full header into a new string.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use logstream::header::render_header;
///
/// assert_eq!(render_header(&["solve"], None), "solve:");
/// assert_eq!(
///     render_header(&["solve"], Some(Duration::from_millis(1500))),
///     "1.500:solve:"
/// );
/// ```
#[must_use]
pub fn render_header<S>(prefixes: &[S], elapsed: Option<Duration>) -> String
where
    S: AsRef<str>,
{
    let mut out = String::new();
    write_header(&mut out, prefixes, elapsed);
    out
}
