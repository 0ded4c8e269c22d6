//! crates/sublog-sink/src/buffer.rs
//! Clonable in-memory writer for capturing emitted log lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Clonable byte buffer implementing [`Write`].
///
/// Every clone appends to the same storage, which makes the type a natural
/// capture target for loggers: hand one clone to [`shared_sink`] and keep
/// another to inspect what was emitted. Tests across the workspace rely on
/// this instead of temp files when the filesystem adds nothing.
///
/// [`shared_sink`]: crate::stream::shared_sink
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the bytes written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Removes and returns the bytes written so far.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while appending cannot tear the byte vector, so a poisoned
    // lock is recovered instead of propagated.
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
