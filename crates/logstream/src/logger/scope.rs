use super::PrefixLogger;
use crate::error::{LogStreamError, Result};
use crate::guard::ScopeGuard;

impl<C> PrefixLogger<C> {
    /// Enters a new scope labelled `label`.
    ///
    /// Any string is accepted, including the empty string. The header of the
    /// next line will include it.
    pub fn push(&mut self, label: impl Into<String>) {
        self.prefixes.push(label.into());
    }

    /// Leaves the innermost scope and returns its label.
    ///
    /// # Errors
    ///
    /// Returns [`LogStreamError::ScopeUnderflow`] if no scope is active. The
    /// logger is left untouched in that case.
    pub fn pop(&mut self) -> Result<String> {
        self.prefixes.pop().ok_or(LogStreamError::ScopeUnderflow)
    }

    /// Enters a scope that is left again when the returned guard is dropped.
    ///
    /// The guard dereferences to the logger, so writes go through it while
    /// the scope is open. On drop the stack is cut back to the depth it had
    /// before this call, which also discards scopes pushed and not popped
    /// inside the guarded region.
    ///
    /// # Examples
    ///
    /// ```
    /// use logstream::PrefixLogger;
    /// use logstream::{SharedBuffer, StreamSink};
    ///
    /// let console = SharedBuffer::new();
    /// let mut log = PrefixLogger::new(StreamSink::new(console.clone()));
    /// {
    ///     let mut solve = log.scope("solve");
    ///     solve.write_line("start")?;
    /// }
    /// assert_eq!(log.depth(), 0);
    /// assert_eq!(console.contents(), "solve:start\n");
    /// # Ok::<(), logstream::LogStreamError>(())
    /// ```
    pub fn scope(&mut self, label: impl Into<String>) -> ScopeGuard<'_, C> {
        let entry_depth = self.depth();
        self.push(label);
        ScopeGuard::new(self, entry_depth)
    }

    pub(crate) fn truncate_scopes(&mut self, depth: usize) {
        self.prefixes.truncate(depth);
    }
}
