//! # IronStream Core
//!
//! Core types and traits for typed binary stream access.
//!
//! This crate provides:
//! - Channel traits for capability-gated byte access ([`ReadChannel`], [`WriteChannel`])
//! - Memory- and file-backed channel implementations
//! - The [`Stream`] wrapper with bounds-checked, byte-order aware typed reads and writes
//! - [`FromStream`] and [`ToStream`] contracts for user serializable types
//! - Error types and an optional stack-trace diagnostic

pub mod channel;
pub mod decode;
pub mod encode;
pub mod error;
pub mod file;
pub mod stream;
pub mod trace;
pub mod types;

pub use channel::{Channel, MemoryChannel, MemorySink, MemorySource, ReadChannel, WriteChannel};
pub use decode::FromStream;
pub use encode::ToStream;
pub use error::{Error, Result};
pub use file::{FileChannel, FileSink, FileSource};
pub use stream::{
    FileReadStream, FileStream, FileWriteStream, MemoryReadStream, MemoryStream,
    MemoryWriteStream, Stream,
};
pub use trace::{StackTrace, Traced};
pub use types::{ByteOrder, Primitive};
