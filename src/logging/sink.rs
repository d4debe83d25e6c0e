// SPDX-License-Identifier: Apache-2.0 OR MIT
// Output sinks for rendered log lines

use super::{LoggingError, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination a logger writes rendered lines to
///
/// The logger writes one complete line per call and never buffers beyond it.
pub enum Sink {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    File { path: PathBuf, file: File },
    Writer(Box<dyn Write + Send>),
}

/// Which kind of destination a [`Sink`] is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Stdout,
    Stderr,
    File(PathBuf),
    Writer,
}

impl Sink {
    pub fn stdout() -> Self {
        Sink::Stdout(io::stdout())
    }

    pub fn stderr() -> Self {
        Sink::Stderr(io::stderr())
    }

    /// Wrap any writer (in-memory buffers, sockets, pipes...)
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Writer(Box::new(writer))
    }

    /// Open `path` for append, creating it with mode 0644 if missing
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.write(true).create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = options.open(path).map_err(|source| LoggingError::Sink {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Sink::File {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn kind(&self) -> SinkKind {
        match self {
            Sink::Stdout(_) => SinkKind::Stdout,
            Sink::Stderr(_) => SinkKind::Stderr,
            Sink::File { path, .. } => SinkKind::File(path.clone()),
            Sink::Writer(_) => SinkKind::Writer,
        }
    }

    /// Write one rendered line. Failures are dropped on purpose: logging
    /// must never disturb the caller.
    pub(crate) fn write_line(&mut self, line: &[u8]) {
        let _ = self.write_all(line);
        let _ = self.flush();
    }
}

impl Default for Sink {
    fn default() -> Self {
        Sink::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sink({:?})", self.kind())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(out) => out.write(buf),
            Sink::Stderr(err) => err.write(buf),
            Sink::File { file, .. } => file.write(buf),
            Sink::Writer(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(out) => out.flush(),
            Sink::Stderr(err) => err.flush(),
            Sink::File { file, .. } => file.flush(),
            Sink::Writer(writer) => writer.flush(),
        }
    }
}

/// Named output direction from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Direction {
    /// `"stdout"` and `""` select stdout, `"stderr"` selects stderr, and
    /// anything else is a file path.
    pub fn parse(direction: &str) -> Self {
        match direction {
            "" | "stdout" => Direction::Stdout,
            "stderr" => Direction::Stderr,
            path => Direction::File(PathBuf::from(path)),
        }
    }

    pub fn open(&self) -> Result<Sink> {
        match self {
            Direction::Stdout => Ok(Sink::stdout()),
            Direction::Stderr => Ok(Sink::stderr()),
            Direction::File(path) => Sink::file(path),
        }
    }
}

/// Shared in-memory buffer usable as a sink
///
/// Clones share the same buffer, so a test can keep one handle while the
/// logger owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Drain the buffer and return its contents
    pub fn take(&self) -> String {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        let drained = std::mem::take(&mut *buffer);
        String::from_utf8_lossy(&drained).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<MemorySink> for Sink {
    fn from(sink: MemorySink) -> Self {
        Sink::writer(sink)
    }
}
