//! # IronStream
//!
//! Typed, bounds-checked, byte-order aware access to binary streams.
//!
//! IronStream layers typed read/write operations over an arbitrary owned
//! byte channel: an in-memory buffer, a file, or any type implementing the
//! channel traits.
//!
//! ## Features
//!
//! - **Capability gating** - read-path and write-path operations exist only
//!   for channels that support them, enforced at compile time
//! - **Bounds-checked reads** - every read is validated against the channel
//!   size captured at construction before any byte is transferred
//! - **Independent byte order** - full byte-sequence reversal, configured
//!   separately for the read and write paths
//! - **Composable serialization** - user types implement [`FromStream`] and
//!   [`ToStream`] and nest arbitrarily through the same wrapper
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironstream::prelude::*;
//!
//! let channel = MemorySource::new(vec![0x01, 0x02, 0x03, 0x04]);
//! let mut stream = Stream::new(channel)?;
//! let value: u32 = stream.read()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Channel traits, channel implementations, the stream wrapper
//! - [`util`] - String helpers

pub mod prelude;

/// Core channel traits and the typed stream wrapper.
pub mod core {
    pub use ironstream_core::*;
}

/// String helpers.
pub mod util {
    pub use ironstream_util::*;
}

// Re-export commonly used items at the crate root
pub use ironstream_core::{
    channel::{Channel, MemoryChannel, MemorySink, MemorySource, ReadChannel, WriteChannel},
    decode::FromStream,
    encode::ToStream,
    error::{Error, Result},
    file::{FileChannel, FileSink, FileSource},
    stream::Stream,
    types::ByteOrder,
};
