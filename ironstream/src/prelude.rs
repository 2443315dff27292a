//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use ironstream::prelude::*;
//! ```

// Core types
pub use ironstream_core::channel::{
    Channel, MemoryChannel, MemorySink, MemorySource, ReadChannel, WriteChannel,
};
pub use ironstream_core::decode::FromStream;
pub use ironstream_core::encode::ToStream;
pub use ironstream_core::error::{Error, Result};
pub use ironstream_core::file::{FileChannel, FileSink, FileSource};
pub use ironstream_core::stream::{
    FileReadStream, FileStream, FileWriteStream, MemoryReadStream, MemoryStream,
    MemoryWriteStream, Stream,
};
pub use ironstream_core::trace::{StackTrace, Traced};
pub use ironstream_core::types::{ByteOrder, Primitive};

// Utilities
pub use ironstream_util::strings;
