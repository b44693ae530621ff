//! Writing encoded strings into caller-provided storage.
//!
//! The [Width] policy picks the prefix and the [Encoder] lays out prefix, payload, and a trailing
//! terminator. Every write checks capacity before touching the destination, so a failed write
//! leaves it unchanged.

use crate::{prefix::Prefix, EncodeSize, Error, Write};
use bytes::BufMut;
use std::ffi::CStr;
use tracing::debug;

/// Policy for choosing the width of a length prefix.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Width {
    /// The direct form below 128, otherwise the fewest length bytes.
    #[default]
    Minimal,
    /// Always the multibyte form with this many length bytes.
    ///
    /// Useful to align payloads, or to leave room for a string to be resized in place.
    Fixed(u8),
}

impl Width {
    /// The prefix this policy picks for a string of length `len`.
    pub fn prefix(self, len: u64) -> Result<Prefix, Error> {
        match self {
            Self::Minimal => Ok(Prefix::minimal(len)),
            Self::Fixed(width) => Prefix::fixed(len, width),
        }
    }
}

/// Writes encoded strings using a [Width] policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Encoder {
    width: Width,
}

impl Encoder {
    /// Creates an encoder with the given width policy.
    pub const fn new(width: Width) -> Self {
        Self { width }
    }

    /// The width policy of this encoder.
    pub const fn width(&self) -> Width {
        self.width
    }

    /// Bytes required to hold a string of length `len`, including the terminator.
    pub fn required_size(&self, len: usize) -> Result<usize, Error> {
        let prefix = self.width.prefix(len as u64)?;
        prefix
            .encode_size()
            .checked_add(len)
            .and_then(|size| size.checked_add(1))
            .ok_or(Error::IntegerOverflow(len as u64))
    }

    /// Encodes `payload` into `dest` followed by a terminator, returning the number of bytes
    /// written.
    ///
    /// `payload` may itself contain zero bytes. Such a string decodes correctly but cannot be
    /// exported as a terminated string.
    pub fn write(&self, dest: &mut [u8], payload: &[u8]) -> Result<usize, Error> {
        let prefix = self.width.prefix(payload.len() as u64)?;
        let required = prefix.encode_size() + payload.len() + 1;
        if dest.len() < required {
            debug!(capacity = dest.len(), required, "refusing write");
            return Err(Error::InsufficientCapacity(dest.len(), required));
        }

        let mut buf = &mut dest[..required];
        prefix.write(&mut buf);
        buf.put_slice(payload);
        buf.put_u8(0);
        Ok(required)
    }

    /// Imports a terminated string into `dest`, returning the number of bytes written.
    ///
    /// The string's bytes and its terminator are copied after the prefix.
    pub fn import(&self, dest: &mut [u8], src: &CStr) -> Result<usize, Error> {
        self.write(dest, src.to_bytes())
    }

    /// Imports the bytes of `src` up to its first terminator.
    ///
    /// Fails with [Error::MissingTerminator] if `src` contains no zero byte.
    pub fn import_bytes(&self, dest: &mut [u8], src: &[u8]) -> Result<usize, Error> {
        let src = CStr::from_bytes_until_nul(src).map_err(|_| Error::MissingTerminator)?;
        self.import(dest, src)
    }
}

/// Imports a terminated string into `dest` using the minimal prefix.
///
/// `dest` must hold at least [crate::rsize] of the string's length. Returns the number of bytes
/// written.
///
/// # Examples
///
/// ```
/// use commonware_vlpstr::{import, rsize};
///
/// let mut buf = [0xFF; 10];
/// let written = import(&mut buf, c"Hello!").unwrap();
/// assert_eq!(written, rsize(6));
/// assert_eq!(&buf[..written], b"\x06Hello!\0");
/// ```
pub fn import(dest: &mut [u8], src: &CStr) -> Result<usize, Error> {
    Encoder::default().import(dest, src)
}

/// Imports the bytes of `src` up to its first terminator using the minimal prefix.
pub fn import_bytes(dest: &mut [u8], src: &[u8]) -> Result<usize, Error> {
    Encoder::default().import_bytes(dest, src)
}
