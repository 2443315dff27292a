//! Write-side contract for serializable types.

use crate::channel::WriteChannel;
use crate::error::Result;
use crate::stream::Stream;
use crate::types::Primitive;

/// Contract for types that can be written to a stream.
///
/// Symmetric with [`FromStream`](crate::decode::FromStream): the
/// implementation is handed the wrapper and issues its own sequence of
/// primitive or nested writes. Byte order for the values it writes is applied
/// by those primitive writes; the type is responsible for its own field
/// layout.
pub trait ToStream {
    /// Writes this value to the stream.
    ///
    /// # Errors
    /// Propagates any failure from the primitive writes the implementation
    /// issues.
    fn to_stream<C: WriteChannel>(&self, stream: &mut Stream<C>) -> Result<()>;
}

/// Fixed-width fundamentals go through the byte-order aware raw write.
impl<T: Primitive> ToStream for T {
    #[inline(always)]
    fn to_stream<C: WriteChannel>(&self, stream: &mut Stream<C>) -> Result<()> {
        stream.write_primitive(*self)
    }
}
