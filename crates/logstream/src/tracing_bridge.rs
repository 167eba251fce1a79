//! crates/logstream/src/tracing_bridge.rs
//! Bridge between the tracing crate and the per-thread prefix logger.
//!
//! [`PrefixLayer`] is a tracing-subscriber layer that mirrors span nesting on
//! the prefix stack of [`crate::thread_local`]: entering a span pushes its
//! name, exiting cuts the stack back to where it was on entry, and every
//! event's `message` field is written as one line. When the logger is already
//! borrowed on this thread (a span entered inside
//! [`with_log`](crate::thread_local::with_log)) the layer skips the scope or
//! event instead of panicking. Code instrumented with `tracing` spans therefore produces the same
//! `outer:inner:message` lines, and obeys the same depth limits, as code
//! driving the logger directly.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logstream::{LogStreamConfig, init_tracing};
//!
//! init_tracing(&"console=1".parse().unwrap());
//!
//! let solve = tracing::info_span!("solve");
//! let _entered = solve.enter();
//! tracing::info!("starting");   // "solve:starting"
//! ```

use super::config::LogStreamConfig;
use super::thread_local;
use tracing::span;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that maps spans onto scopes and events onto lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefixLayer {
    _private: (),
}

impl PrefixLayer {
    /// Create a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl<S> Layer<S> for PrefixLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let entry_depth = thread_local::try_with_log(|log| {
            let depth = log.depth();
            log.push(span.name());
            depth
        });

        let mut extensions = span.extensions_mut();
        if let Some(entries) = extensions.get_mut::<EntryDepths>() {
            entries.0.push(entry_depth);
        } else {
            extensions.insert(EntryDepths(vec![entry_depth]));
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let entry_depth = span
            .extensions_mut()
            .get_mut::<EntryDepths>()
            .and_then(|entries| entries.0.pop())
            .flatten();
        if let Some(depth) = entry_depth {
            thread_local::try_with_log(|log| log.truncate_scopes(depth));
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            // A layer has nowhere to report sink failures.
            thread_local::try_with_log(|log| log.write_line(message).ok());
        }
    }
}

/// Prefix-stack depths recorded at each enter of a span, innermost last.
///
/// `None` marks an enter that found the logger busy and pushed nothing.
struct EntryDepths(Vec<Option<usize>>);

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Initialize tracing with the prefix layer.
///
/// Applies `config` to the calling thread's logger and installs a global
/// registry subscriber carrying a [`PrefixLayer`]. Other threads keep their
/// own default configuration.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing(config: &LogStreamConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    thread_local::init(config);

    tracing_subscriber::registry().with(PrefixLayer::new()).init();
}

/// Initialize tracing with a filter layer in front of the prefix layer.
///
/// # Example
///
/// ```rust,ignore
/// use logstream::init_tracing_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(&Default::default(), EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(config: &LogStreamConfig, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    thread_local::init(config);

    tracing_subscriber::registry()
        .with(filter)
        .with(PrefixLayer::new())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use logstream_sink::{SharedBuffer, StreamSink};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture() -> SharedBuffer {
        thread_local::reset();
        let console = SharedBuffer::new();
        let _stderr = thread_local::set_console(StreamSink::new(console.clone()));
        console
    }

    #[test]
    fn test_spans_become_prefixes() {
        let console = capture();
        let subscriber = tracing_subscriber::registry().with(PrefixLayer::new());

        tracing::subscriber::with_default(subscriber, || {
            let solve = tracing::info_span!("solve");
            let _solve = solve.enter();
            tracing::info!("start");
            {
                let iter = tracing::info_span!("iter");
                let _iter = iter.enter();
                tracing::info!(residual = 1e-3, "step");
            }
            tracing::info!("end");
        });

        assert_eq!(thread_local::depth(), 0);
        assert_eq!(console.contents(), "solve:start\nsolve:iter:step\nsolve:end\n");
    }

    #[test]
    fn test_depth_limits_apply_to_events() {
        let console = capture();
        thread_local::set_console_depth(1);
        let subscriber = tracing_subscriber::registry().with(PrefixLayer::new());

        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("outer");
            let _outer = outer.enter();
            let inner = tracing::info_span!("inner");
            let _inner = inner.enter();
            tracing::info!("hidden");
        });

        assert!(console.is_empty());
    }

    #[test]
    fn test_events_without_message_are_skipped() {
        let console = capture();
        let subscriber = tracing_subscriber::registry().with(PrefixLayer::new());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(value = 3);
        });

        assert!(console.is_empty());
    }

    #[test]
    fn test_span_inside_with_log_is_skipped() {
        let console = capture();
        let subscriber = tracing_subscriber::registry().with(PrefixLayer::new());

        tracing::subscriber::with_default(subscriber, || {
            thread_local::with_log(|log| {
                let _inner = tracing::info_span!("inner").entered();
                tracing::info!("dropped");
                log.write_line("direct").unwrap();
            });
            let _after = tracing::info_span!("after").entered();
            tracing::info!("logged");
        });

        assert_eq!(thread_local::depth(), 0);
        assert_eq!(console.contents(), "direct\nafter:logged\n");
    }

    #[test]
    fn test_exit_restores_depth_at_entry() {
        let console = capture();
        thread_local::push("app");
        let subscriber = tracing_subscriber::registry().with(PrefixLayer::new());

        tracing::subscriber::with_default(subscriber, || {
            {
                let _solve = tracing::info_span!("solve").entered();
                thread_local::push("manual");
                tracing::info!("inside");
            }
            tracing::info!("outside");
        });

        assert_eq!(thread_local::pop().unwrap(), "app");
        assert_eq!(thread_local::depth(), 0);
        assert_eq!(
            console.contents(),
            "app:solve:manual:inside\napp:outside\n"
        );
    }

    #[test]
    fn test_reentered_span_unwinds_each_entry() {
        let console = capture();
        let subscriber = tracing_subscriber::registry().with(PrefixLayer::new());

        tracing::subscriber::with_default(subscriber, || {
            let step = tracing::info_span!("step");
            for _ in 0..2 {
                let _step = step.enter();
                tracing::info!("run");
            }
        });

        assert_eq!(thread_local::depth(), 0);
        assert_eq!(console.contents(), "step:run\nstep:run\n");
    }
}
