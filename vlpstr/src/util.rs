//! Helpers shared by decoders.

use crate::Error;
use bytes::Buf;

/// Checks that at least `len` bytes remain in `buf`.
#[inline]
pub fn at_least<B: Buf>(buf: &mut B, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Converts a decoded length to `usize`, failing on targets where it does not fit.
#[inline]
pub fn to_usize(len: u64) -> Result<usize, Error> {
    usize::try_from(len).map_err(|_| Error::IntegerOverflow(len))
}
