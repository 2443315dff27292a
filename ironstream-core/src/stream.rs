//! The typed stream wrapper.
//!
//! [`Stream`] owns an underlying byte channel and layers position-aware,
//! bounds-checked, byte-order aware typed reads and writes over it. Which
//! operations exist on a given wrapper is decided by the channel's
//! capabilities at compile time: read-path methods require
//! [`ReadChannel`], write-path methods require [`WriteChannel`], and a
//! channel with both capabilities exposes the union.

use std::io::SeekFrom;

use crate::channel::{Channel, ReadChannel, WriteChannel};
use crate::decode::FromStream;
use crate::encode::ToStream;
use crate::error::{Error, Result};
use crate::file::{FileChannel, FileSink, FileSource};
use crate::types::{ByteOrder, MAX_PRIMITIVE_SIZE, Primitive};

/// Typed wrapper over an owned byte channel.
///
/// The wrapper is the sole owner of its channel and closes it unconditionally
/// when dropped. It is single-threaded and stateful; concurrent use requires
/// external synchronization.
#[derive(Debug)]
pub struct Stream<C: Channel> {
    channel: C,
    size: u64,
    read_order: ByteOrder,
    write_order: ByteOrder,
}

/// Stream over an input-only in-memory channel.
pub type MemoryReadStream = Stream<crate::channel::MemorySource>;
/// Stream over an output-only in-memory channel.
pub type MemoryWriteStream = Stream<crate::channel::MemorySink>;
/// Stream over a bidirectional in-memory channel.
pub type MemoryStream = Stream<crate::channel::MemoryChannel>;
/// Stream over an input-only file channel.
pub type FileReadStream = Stream<FileSource>;
/// Stream over an output-only file channel.
pub type FileWriteStream = Stream<FileSink>;
/// Stream over a bidirectional file channel.
pub type FileStream = Stream<FileChannel>;

impl<C: Channel> Stream<C> {
    /// True if the underlying channel is currently usable.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.channel.is_open()
    }

    /// Closes the underlying channel. Safe to call multiple times.
    pub fn close(&mut self) {
        self.channel.close();
    }

    /// Byte order applied to fundamental values on the read path.
    #[must_use]
    pub fn read_order(&self) -> ByteOrder {
        self.read_order
    }

    /// Byte order applied to fundamental values on the write path.
    #[must_use]
    pub fn write_order(&self) -> ByteOrder {
        self.write_order
    }

    /// Shared view of the underlying channel.
    #[must_use]
    pub fn channel(&self) -> &C {
        &self.channel
    }
}

impl<C: ReadChannel> Stream<C> {
    /// Wraps an input-capable channel with native byte order on both paths.
    ///
    /// The channel's total size is captured here, exactly once, by seeking to
    /// the end, recording the position, and seeking back to the start. All
    /// later read-bounds checks are made against this captured size; the
    /// channel is assumed non-growing from the read perspective.
    ///
    /// # Errors
    /// Propagates any channel failure during the size probe.
    pub fn new(channel: C) -> Result<Self> {
        Self::with_byte_order(channel, ByteOrder::Normal, ByteOrder::Normal)
    }

    /// Wraps an input-capable channel with explicit read and write orders.
    ///
    /// Both orders are fixed for the lifetime of the wrapper.
    ///
    /// # Errors
    /// Propagates any channel failure during the size probe.
    pub fn with_byte_order(
        mut channel: C,
        read_order: ByteOrder,
        write_order: ByteOrder,
    ) -> Result<Self> {
        channel.seek_read(SeekFrom::End(0))?;
        let size = channel.read_position()?;
        channel.seek_read(SeekFrom::Start(0))?;
        Ok(Self {
            channel,
            size,
            read_order,
            write_order,
        })
    }

    /// True if the channel has signaled it has no more data to read.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.channel.eof()
    }

    /// Total channel size in bytes, captured at construction.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Current read offset from the start, in bytes.
    ///
    /// # Errors
    /// Propagates any channel failure while querying the cursor.
    pub fn read_position(&mut self) -> Result<u64> {
        self.channel.read_position()
    }

    /// Moves the read cursor; returns the new offset from the start.
    ///
    /// # Errors
    /// Propagates any channel failure while seeking.
    pub fn seek_read(&mut self, position: SeekFrom) -> Result<u64> {
        self.channel.seek_read(position)
    }

    /// Reads a value of `T` from the current read position.
    ///
    /// Fundamental fixed-width values go through the checked raw read:
    /// end-of-data is rejected first, then a read crossing the captured size,
    /// and the byte representation is reversed in place when the read order
    /// is [`ByteOrder::Reverse`]. Serializable types are delegated their own
    /// [`FromStream`] contract and compose from individually checked
    /// primitive reads.
    ///
    /// # Errors
    /// [`Error::UnexpectedEof`] at end-of-data, [`Error::OutOfBounds`] when
    /// the read would cross the captured size, or any propagated channel
    /// failure.
    pub fn read<T: FromStream>(&mut self) -> Result<T> {
        T::from_stream(self)
    }

    pub(crate) fn read_primitive<T: Primitive>(&mut self) -> Result<T> {
        let position = self.channel.read_position()?;
        if self.channel.eof() {
            return Err(Error::UnexpectedEof {
                position,
                requested: T::SIZE,
            });
        }
        if position + T::SIZE as u64 > self.size {
            return Err(Error::OutOfBounds {
                requested: T::SIZE,
                available: self.size.saturating_sub(position),
            });
        }

        let mut scratch = [0u8; MAX_PRIMITIVE_SIZE];
        let raw = &mut scratch[..T::SIZE];
        self.channel.read_exact(raw)?;
        self.read_order.apply(raw);
        Ok(T::from_native(raw))
    }
}

impl<C: WriteChannel> Stream<C> {
    /// Wraps an output-only channel with native byte order.
    ///
    /// No size probe occurs; the write path carries no size bound and the
    /// channel grows as needed.
    #[must_use]
    pub fn sink(channel: C) -> Self {
        Self::sink_with_byte_order(channel, ByteOrder::Normal)
    }

    /// Wraps an output-only channel with an explicit write order.
    #[must_use]
    pub fn sink_with_byte_order(channel: C, write_order: ByteOrder) -> Self {
        Self {
            channel,
            size: 0,
            read_order: ByteOrder::Normal,
            write_order,
        }
    }

    /// Current write offset from the start, in bytes.
    ///
    /// # Errors
    /// Propagates any channel failure while querying the cursor.
    pub fn write_position(&mut self) -> Result<u64> {
        self.channel.write_position()
    }

    /// Moves the write cursor to an absolute offset from the start.
    ///
    /// # Errors
    /// Propagates any channel failure while seeking.
    pub fn seek_write(&mut self, position: u64) -> Result<u64> {
        self.channel.seek_write(position)
    }

    /// Writes a value of `T` at the current write position.
    ///
    /// Fundamental fixed-width values have their byte representation
    /// reversed in place first when the write order is
    /// [`ByteOrder::Reverse`]. Serializable types are delegated their own
    /// [`ToStream`] contract.
    ///
    /// # Errors
    /// Propagates any channel failure during the transfer.
    pub fn write<T: ToStream>(&mut self, value: &T) -> Result<()> {
        value.to_stream(self)
    }

    pub(crate) fn write_primitive<T: Primitive>(&mut self, value: T) -> Result<()> {
        let mut scratch = [0u8; MAX_PRIMITIVE_SIZE];
        let raw = &mut scratch[..T::SIZE];
        value.to_native(raw);
        self.write_order.apply(raw);
        self.channel.write_all(raw)
    }
}

impl<C: Channel> Drop for Stream<C> {
    fn drop(&mut self) {
        self.channel.close();
    }
}
