//! The tag byte at the start of every encoded string.
//!
//! ```text
//! bit:    7   6   5   4   3   2   1   0
//!       +---+---------------------------+
//!       | 0 |   direct length (0..127)  |   direct form
//!       +---+---+---+---+---------------+
//!       | 1 | reserved  | width (N)     |   multibyte form
//!       +---+-----------+---------------+
//! ```

use crate::{Config, Error, Reserved};
use tracing::debug;

/// Set when the length is stored in the bytes following the flags byte.
pub const MULTIBYTE: u8 = 0x80;

/// Low bits holding the length in the direct form.
pub const DIRECT_MASK: u8 = 0x7F;

/// Low bits holding the width in the multibyte form.
pub const WIDTH_MASK: u8 = 0x0F;

/// Bits that must be zero in the multibyte form.
pub const RESERVED_MASK: u8 = 0x70;

/// Largest length that fits in the direct form.
pub const MAX_DIRECT: u8 = DIRECT_MASK;

/// Largest supported width, bounded by the 64-bit length type.
pub const MAX_WIDTH: u8 = u64::BITS as u8 / 8;

/// A flags byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Flags(pub u8);

impl Flags {
    /// Flags for a direct-form string of length `len`.
    ///
    /// Panics if `len` exceeds [MAX_DIRECT].
    pub const fn direct(len: u8) -> Self {
        assert!(len <= MAX_DIRECT, "direct length exceeds 127");
        Self(len)
    }

    /// Flags for a multibyte-form string with `width` length bytes.
    ///
    /// Panics if `width` is not in `1..=MAX_WIDTH`.
    pub const fn multibyte(width: u8) -> Self {
        assert!(width > 0 && width <= MAX_WIDTH, "width out of range");
        Self(MULTIBYTE | width)
    }

    /// Returns true if the length is stored in the flags byte itself.
    #[inline]
    pub const fn is_direct(self) -> bool {
        self.0 & MULTIBYTE == 0
    }

    /// Number of length bytes following the flags byte (0 in the direct form).
    #[inline]
    pub const fn width(self) -> u8 {
        if self.is_direct() {
            0
        } else {
            self.0 & WIDTH_MASK
        }
    }

    /// Reserved bits, or 0 in the direct form (where they are part of the length).
    #[inline]
    pub const fn reserved(self) -> u8 {
        if self.is_direct() {
            0
        } else {
            self.0 & RESERVED_MASK
        }
    }

    /// Offset of the first payload byte, computed from the flags alone.
    #[inline]
    pub const fn data_offset(self) -> usize {
        1 + self.width() as usize
    }

    /// Checks the flags against `cfg`.
    ///
    /// A multibyte width must be in `1..=MAX_WIDTH` regardless of config.
    pub fn validate(self, cfg: &Config) -> Result<(), Error> {
        if self.is_direct() {
            return Ok(());
        }
        let reason = if self.reserved() != 0 && cfg.reserved == Reserved::Reject {
            "reserved bits set"
        } else if self.width() == 0 {
            "zero width"
        } else if self.width() > MAX_WIDTH {
            "width exceeds 8"
        } else {
            return Ok(());
        };
        debug!(flags = self.0, reason, "rejecting prefix");
        Err(Error::MalformedPrefix(self.0, reason))
    }
}
