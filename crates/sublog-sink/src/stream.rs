//! crates/sublog-sink/src/stream.rs
//! Line-oriented sink wrapper and the shared handle loggers clone between
//! themselves.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Line-oriented wrapper around an [`std::io::Write`] implementor.
///
/// Each call to [`StreamSink::write_line`] emits exactly one line: the payload
/// followed by a newline unless the payload already carries one. Flushing is
/// left to the caller so emission policies (such as flushing after every
/// message) live in one place.
#[derive(Debug)]
pub struct StreamSink<W> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    /// Creates a sink that writes lines to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns a shared reference to the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Returns a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes `line` followed by a newline when the payload lacks one.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Shared handle to one [`StreamSink`], cloned between a logger and every
/// sublogger derived from it.
pub type SharedSink = Arc<Mutex<StreamSink<Box<dyn Write + Send>>>>;

/// Wraps `writer` in a [`StreamSink`] behind a [`SharedSink`] handle.
#[must_use]
pub fn shared_sink<W>(writer: W) -> SharedSink
where
    W: Write + Send + 'static,
{
    Arc::new(Mutex::new(StreamSink::new(Box::new(writer))))
}
