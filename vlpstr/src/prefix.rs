//! The length prefix: a flags byte optionally followed by a little-endian length.
//!
//! Decoding is driven entirely by the declared width, so any legal encoding of a length (minimal
//! or overlong) reads back as the same [Prefix] length. Which width to write is left to the
//! caller, see [crate::Width].

use crate::{
    flags::{Flags, MAX_DIRECT, MAX_WIDTH},
    util::at_least,
    Config, EncodeSize, Error, Read, Write,
};
use bytes::{Buf, BufMut};
use tracing::debug;

/// Minimum number of bytes needed to hold `len` as an unsigned little-endian integer.
///
/// Returns 0 for a length of 0.
#[inline]
pub const fn min_width(len: u64) -> u8 {
    (u64::BITS - len.leading_zeros()).div_ceil(8) as u8
}

/// Size of the minimal prefix for a string of length `len`.
#[inline]
pub const fn prefix_size(len: u64) -> usize {
    if len <= MAX_DIRECT as u64 {
        1
    } else {
        1 + min_width(len) as usize
    }
}

/// Bytes required to hold a string of length `len` with its minimal prefix and a terminator.
///
/// Saturates at `usize::MAX` for lengths that leave no room for a prefix, which no buffer can
/// hold. Use [checked_rsize] to detect that case.
///
/// # Examples
///
/// ```
/// use commonware_vlpstr::rsize;
///
/// assert_eq!(rsize(0), 2);
/// assert_eq!(rsize(6), 8);
/// assert_eq!(rsize(128), 131);
/// ```
#[inline]
pub fn rsize(len: usize) -> usize {
    len.saturating_add(prefix_size(len as u64) + 1)
}

/// Like [rsize], but for any 64-bit length, returning `None` on overflow.
#[inline]
pub const fn checked_rsize(len: u64) -> Option<u64> {
    len.checked_add(prefix_size(len) as u64 + 1)
}

/// A decoded length prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Prefix {
    len: u64,
    width: u8,
}

impl Prefix {
    /// The smallest prefix for `len`: the direct form below 128, otherwise the fewest length bytes.
    pub const fn minimal(len: u64) -> Self {
        let width = if len <= MAX_DIRECT as u64 {
            0
        } else {
            min_width(len)
        };
        Self { len, width }
    }

    /// A multibyte prefix for `len` with exactly `width` length bytes.
    ///
    /// Fails if `width` is 0, exceeds 8, or is too narrow for `len`.
    pub fn fixed(len: u64, width: u8) -> Result<Self, Error> {
        if width == 0 || width > MAX_WIDTH || width < min_width(len) {
            return Err(Error::InvalidWidth(width, len));
        }
        Ok(Self { len, width })
    }

    /// Logical length of the string, excluding prefix and terminator.
    #[inline]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the string is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of length bytes (0 in the direct form).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns true if this prefix uses more length bytes than [Prefix::minimal] would.
    #[inline]
    pub const fn is_overlong(&self) -> bool {
        self.width != Self::minimal(self.len).width
    }

    /// The flags byte of this prefix.
    #[inline]
    pub const fn flags(&self) -> Flags {
        if self.width == 0 {
            Flags(self.len as u8)
        } else {
            Flags::multibyte(self.width)
        }
    }

    /// Offset of the first payload byte.
    #[inline]
    pub const fn data_offset(&self) -> usize {
        1 + self.width as usize
    }
}

impl Write for Prefix {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.flags().0);
        if self.width > 0 {
            buf.put_uint_le(self.len, self.width as usize);
        }
    }
}

impl EncodeSize for Prefix {
    #[inline]
    fn encode_size(&self) -> usize {
        self.data_offset()
    }
}

impl Read for Prefix {
    type Cfg = Config;

    fn read_cfg(buf: &mut impl Buf, cfg: &Config) -> Result<Self, Error> {
        at_least(buf, 1)?;
        let flags = Flags(buf.get_u8());
        flags.validate(cfg)?;

        let width = flags.width();
        let len = if width == 0 {
            flags.0 as u64
        } else {
            at_least(buf, width as usize)?;
            buf.get_uint_le(width as usize)
        };
        if !cfg.len.contains(&len) {
            debug!(len, "rejecting length");
            return Err(Error::InvalidLength(len));
        }
        Ok(Self { len, width })
    }
}
