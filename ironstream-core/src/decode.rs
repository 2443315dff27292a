//! Read-side contract for serializable types.

use crate::channel::ReadChannel;
use crate::error::Result;
use crate::stream::Stream;
use crate::types::Primitive;

/// Contract for types that can be assembled from a stream.
///
/// An implementation is handed the wrapper itself and issues its own sequence
/// of primitive or nested reads through it, composing arbitrarily deep. The
/// wrapper performs no bounds checking or byte-order transformation at this
/// level; each primitive read the implementation issues is checked
/// individually.
///
/// # Example
/// ```ignore
/// struct Header {
///     magic: u32,
///     count: u16,
/// }
///
/// impl FromStream for Header {
///     fn from_stream<C: ReadChannel>(stream: &mut Stream<C>) -> Result<Self> {
///         Ok(Self {
///             magic: stream.read()?,
///             count: stream.read()?,
///         })
///     }
/// }
/// ```
pub trait FromStream: Sized {
    /// Reads a value of this type from the stream.
    ///
    /// # Errors
    /// Propagates any failure from the primitive reads the implementation
    /// issues.
    fn from_stream<C: ReadChannel>(stream: &mut Stream<C>) -> Result<Self>;
}

/// Fixed-width fundamentals go through the checked, byte-order aware raw read.
impl<T: Primitive> FromStream for T {
    #[inline(always)]
    fn from_stream<C: ReadChannel>(stream: &mut Stream<C>) -> Result<Self> {
        stream.read_primitive()
    }
}
