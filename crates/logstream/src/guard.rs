//! crates/logstream/src/guard.rs
//! RAII guard that leaves a scope when dropped.

use crate::logger::PrefixLogger;

/// Open scope on a [`PrefixLogger`], created by [`PrefixLogger::scope`].
///
/// While the guard is alive the scope's label is part of every header.
/// Dropping the guard cuts the prefix stack back to the depth it had before
/// the scope was entered. The guard implements [`Deref`](std::ops::Deref) and
/// [`DerefMut`](std::ops::DerefMut), so logger methods, including nested
/// [`scope`](PrefixLogger::scope) calls, are available through it.
#[must_use = "dropping the guard immediately leaves the scope"]
pub struct ScopeGuard<'a, C> {
    logger: Option<&'a mut PrefixLogger<C>>,
    entry_depth: usize,
}

impl<'a, C> ScopeGuard<'a, C> {
    pub(crate) const fn new(logger: &'a mut PrefixLogger<C>, entry_depth: usize) -> Self {
        Self {
            logger: Some(logger),
            entry_depth,
        }
    }

    /// Depth the logger returns to when the guard is dropped.
    #[must_use]
    pub const fn entry_depth(&self) -> usize {
        self.entry_depth
    }

    /// Consumes the guard without leaving the scope.
    ///
    /// The scope stays on the stack and has to be removed with
    /// [`PrefixLogger::pop`] later.
    ///
    /// # Examples
    ///
    /// ```
    /// use logstream::PrefixLogger;
    /// use logstream::SharedBuffer;
    /// use logstream::StreamSink;
    ///
    /// let mut log = PrefixLogger::new(StreamSink::new(SharedBuffer::new()));
    /// log.scope("setup").into_inner();
    /// assert_eq!(log.prefixes(), ["setup"]);
    ///
    /// log.pop()?;
    /// assert_eq!(log.depth(), 0);
    /// # Ok::<(), logstream::LogStreamError>(())
    /// ```
    pub fn into_inner(mut self) -> &'a mut PrefixLogger<C> {
        self.logger
            .take()
            .expect("scope guard must hold a logger")
    }
}

impl<C> Drop for ScopeGuard<'_, C> {
    fn drop(&mut self) {
        if let Some(logger) = self.logger.take() {
            logger.truncate_scopes(self.entry_depth);
        }
    }
}

impl<C> std::ops::Deref for ScopeGuard<'_, C> {
    type Target = PrefixLogger<C>;

    fn deref(&self) -> &Self::Target {
        self.logger
            .as_deref()
            .expect("scope guard remains active while borrowed")
    }
}

impl<C> std::ops::DerefMut for ScopeGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.logger
            .as_deref_mut()
            .expect("scope guard remains active while borrowed")
    }
}
