//! Error types for stream operations.

use thiserror::Error;

/// Error type for stream operations.
///
/// Every failure surfaces through this one type: precondition violations on
/// the read path and any failure propagated from the underlying channel.
#[derive(Debug, Error)]
pub enum Error {
    /// Read attempted while the channel already reports end-of-data.
    #[error("end of stream at offset {position:#010x}, read size was {requested}")]
    UnexpectedEof {
        /// Read cursor offset when the read was attempted.
        position: u64,
        /// Number of bytes the read asked for.
        requested: usize,
    },

    /// Read would cross the channel size captured at construction.
    #[error("attempt to read {requested} bytes while {available} is available")]
    OutOfBounds {
        /// Number of bytes the read asked for.
        requested: usize,
        /// Bytes remaining before the end of the channel.
        available: u64,
    },

    /// Operation issued on a channel that has been closed.
    #[error("channel is closed")]
    Closed,

    /// Failure propagated from the underlying channel (open, seek, transfer).
    #[error("channel I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for stream operations.
pub type Result<T> = std::result::Result<T, Error>;
