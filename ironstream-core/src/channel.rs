//! Channel traits and in-memory channel implementations.
//!
//! This module provides:
//! - [`Channel`] base contract (open state, idempotent close)
//! - [`ReadChannel`] input capability (end-of-data query, byte reads, read cursor)
//! - [`WriteChannel`] output capability (byte writes, write cursor)
//! - [`MemorySource`], [`MemorySink`], [`MemoryChannel`] in-memory implementations
//!
//! Capability gating is enforced by the trait system: a channel type simply
//! does not implement the traits for the directions it does not support, so
//! misuse fails to compile instead of failing at runtime.

use std::io::SeekFrom;

use crate::error::{Error, Result};

/// Base contract every channel satisfies.
pub trait Channel {
    /// True while the channel is usable.
    fn is_open(&self) -> bool;

    /// Closes the channel. Closing an already closed channel is a no-op.
    fn close(&mut self);
}

/// Input capability: byte-range reads and a read cursor.
pub trait ReadChannel: Channel {
    /// True once the read cursor has reached the end of the data.
    fn eof(&self) -> bool;

    /// Fills `buf` exactly from the current read cursor, advancing it.
    ///
    /// # Errors
    /// Fails if the channel is closed or cannot supply `buf.len()` bytes.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Current read offset from the start, in bytes.
    ///
    /// # Errors
    /// Fails if the channel is closed or the cursor cannot be queried.
    fn read_position(&mut self) -> Result<u64>;

    /// Moves the read cursor; returns the new offset from the start.
    ///
    /// # Errors
    /// Fails if the channel is closed or the target resolves before the start.
    fn seek_read(&mut self, position: SeekFrom) -> Result<u64>;
}

/// Output capability: byte-range writes and a write cursor.
pub trait WriteChannel: Channel {
    /// Writes all of `buf` at the current write cursor, advancing it.
    ///
    /// Output channels grow as needed; no size bound applies on this path.
    ///
    /// # Errors
    /// Fails if the channel is closed or the transfer fails.
    fn write_all(&mut self, buf: &[u8]) -> Result<()>;

    /// Current write offset from the start, in bytes.
    ///
    /// # Errors
    /// Fails if the channel is closed or the cursor cannot be queried.
    fn write_position(&mut self) -> Result<u64>;

    /// Moves the write cursor to an absolute offset from the start.
    ///
    /// # Errors
    /// Fails if the channel is closed.
    fn seek_write(&mut self, position: u64) -> Result<u64>;
}

/// Resolves a seek target against a cursor and total length.
pub(crate) fn resolve_seek(length: u64, cursor: u64, position: SeekFrom) -> Result<u64> {
    let target = match position {
        SeekFrom::Start(offset) => Some(offset),
        SeekFrom::Current(delta) => cursor.checked_add_signed(delta),
        SeekFrom::End(delta) => length.checked_add_signed(delta),
    };
    target.ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seek before start of channel",
        ))
    })
}

/// Input-only channel over an owned byte buffer.
#[derive(Debug)]
pub struct MemorySource {
    data: Vec<u8>,
    cursor: u64,
    open: bool,
}

impl MemorySource {
    /// Creates a source positioned at the start of `data`.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            cursor: 0,
            open: true,
        }
    }
}

impl Channel for MemorySource {
    #[inline]
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }
}

impl ReadChannel for MemorySource {
    #[inline]
    fn eof(&self) -> bool {
        self.cursor >= self.data.len() as u64
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if !self.open {
            return Err(Error::Closed);
        }
        let start = self.cursor as usize;
        let end = start + buf.len();
        if end > self.data.len() {
            return Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into()));
        }
        buf.copy_from_slice(&self.data[start..end]);
        self.cursor = end as u64;
        Ok(())
    }

    fn read_position(&mut self) -> Result<u64> {
        if !self.open {
            return Err(Error::Closed);
        }
        Ok(self.cursor)
    }

    fn seek_read(&mut self, position: SeekFrom) -> Result<u64> {
        if !self.open {
            return Err(Error::Closed);
        }
        self.cursor = resolve_seek(self.data.len() as u64, self.cursor, position)?;
        Ok(self.cursor)
    }
}

/// Output-only channel over a growable byte buffer.
#[derive(Debug, Default)]
pub struct MemorySink {
    data: Vec<u8>,
    cursor: u64,
    closed: bool,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the sink, returning the written bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Channel for MemorySink {
    #[inline]
    fn is_open(&self) -> bool {
        !self.closed
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

impl WriteChannel for MemorySink {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        let start = self.cursor as usize;
        let end = start + buf.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(buf);
        self.cursor = end as u64;
        Ok(())
    }

    fn write_position(&mut self) -> Result<u64> {
        if self.closed {
            return Err(Error::Closed);
        }
        Ok(self.cursor)
    }

    fn seek_write(&mut self, position: u64) -> Result<u64> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.cursor = position;
        Ok(self.cursor)
    }
}

/// Bidirectional in-memory channel with independent read and write cursors.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    data: Vec<u8>,
    read_cursor: u64,
    write_cursor: u64,
    closed: bool,
}

impl MemoryChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel preloaded with `data`, both cursors at the start.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data,
            read_cursor: 0,
            write_cursor: 0,
            closed: false,
        }
    }

    /// Current channel contents.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the channel, returning its contents.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Channel for MemoryChannel {
    #[inline]
    fn is_open(&self) -> bool {
        !self.closed
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

impl ReadChannel for MemoryChannel {
    #[inline]
    fn eof(&self) -> bool {
        self.read_cursor >= self.data.len() as u64
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        let start = self.read_cursor as usize;
        let end = start + buf.len();
        if end > self.data.len() {
            return Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into()));
        }
        buf.copy_from_slice(&self.data[start..end]);
        self.read_cursor = end as u64;
        Ok(())
    }

    fn read_position(&mut self) -> Result<u64> {
        if self.closed {
            return Err(Error::Closed);
        }
        Ok(self.read_cursor)
    }

    fn seek_read(&mut self, position: SeekFrom) -> Result<u64> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.read_cursor = resolve_seek(self.data.len() as u64, self.read_cursor, position)?;
        Ok(self.read_cursor)
    }
}

impl WriteChannel for MemoryChannel {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        let start = self.write_cursor as usize;
        let end = start + buf.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(buf);
        self.write_cursor = end as u64;
        Ok(())
    }

    fn write_position(&mut self) -> Result<u64> {
        if self.closed {
            return Err(Error::Closed);
        }
        Ok(self.write_cursor)
    }

    fn seek_write(&mut self, position: u64) -> Result<u64> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.write_cursor = position;
        Ok(self.write_cursor)
    }
}
