use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// In-memory writer whose clones all append to the same byte buffer.
///
/// A logger takes ownership of the sink it writes into. Handing it a clone of
/// a [`SharedBuffer`] keeps the storage observable from the outside, which is
/// how tests and embedding applications inspect what reached a particular
/// destination. The buffer is single-threaded by construction (`!Send`),
/// matching the logger it is meant to pair with.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use logstream_sink::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let mut handle = buffer.clone();
/// handle.write_all(b"iter:residual=1e-3").unwrap();
///
/// assert_eq!(buffer.contents(), "iter:residual=1e-3");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffered bytes decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.borrow()).into_owned()
    }

    /// Returns a copy of the raw buffered bytes.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.borrow().clone()
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Reports whether nothing has been written yet (or since the last [`take`](Self::take)).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Drains the buffer, returning everything written so far.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }

    /// Reports whether `other` shares storage with this handle.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut first = buffer.clone();
        let mut second = buffer.clone();

        first.write_all(b"a:").expect("write succeeds");
        second.write_all(b"b:").expect("write succeeds");

        assert_eq!(buffer.contents(), "a:b:");
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn take_drains_buffer() {
        let mut buffer = SharedBuffer::new();
        buffer.write_all(b"done").expect("write succeeds");

        assert_eq!(buffer.take(), b"done".to_vec());
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn independent_buffers_do_not_alias() {
        let left = SharedBuffer::new();
        let right = SharedBuffer::new();
        assert!(!left.ptr_eq(&right));
    }

    #[test]
    fn contents_replaces_invalid_utf8() {
        let mut buffer = SharedBuffer::new();
        buffer.write_all(&[b'o', b'k', 0xff]).expect("write succeeds");
        assert_eq!(buffer.contents(), "ok\u{fffd}");
        assert_eq!(buffer.bytes(), vec![b'o', b'k', 0xff]);
    }
}
