//! Views over encoded strings in caller-owned memory.

use crate::{
    flags::Flags,
    prefix::Prefix,
    util::{at_least, to_usize},
    Config, EncodeSize, Error, Read, Write,
};
use bytes::BufMut;
use std::ffi::CStr;
use tracing::debug;

/// Offset of the first payload byte in `buf`, computed from the flags byte alone.
///
/// The length bytes and payload are not read.
pub fn data(buf: &[u8]) -> Result<usize, Error> {
    data_cfg(buf, &Config::default())
}

/// Like [data], validating the flags byte against `cfg`.
pub fn data_cfg(buf: &[u8], cfg: &Config) -> Result<usize, Error> {
    let flags = Flags(*buf.first().ok_or(Error::EndOfBuffer)?);
    flags.validate(cfg)?;
    Ok(flags.data_offset())
}

/// Logical length of the string encoded in `buf`.
///
/// Only the prefix is read, so `buf` need not contain the payload.
///
/// # Examples
///
/// ```
/// use commonware_vlpstr::{data, len};
///
/// let overlong = [0x87, 10, 0, 0, 0, 0, 0, 0];
/// assert_eq!(len(&overlong).unwrap(), 10);
/// assert_eq!(data(&overlong).unwrap(), 8);
/// ```
pub fn len(buf: &[u8]) -> Result<u64, Error> {
    len_cfg(buf, &Config::default())
}

/// Like [len], decoding the prefix with `cfg`.
pub fn len_cfg(mut buf: &[u8], cfg: &Config) -> Result<u64, Error> {
    Ok(Prefix::read_cfg(&mut buf, cfg)?.len())
}

/// Reads the prefix of `buf` and returns it with the end offset of the payload.
fn locate(buf: &[u8], cfg: &Config) -> Result<(Prefix, usize), Error> {
    let prefix = Prefix::read_cfg(&mut &buf[..], cfg)?;
    let len = to_usize(prefix.len())?;
    let end = prefix
        .data_offset()
        .checked_add(len)
        .ok_or(Error::IntegerOverflow(prefix.len()))?;
    if let Err(err) = at_least(&mut &buf[..], end) {
        debug!(available = buf.len(), required = end, "payload truncated");
        return Err(err);
    }
    Ok((prefix, end))
}

/// A validated, read-only view of an encoded string.
///
/// The underlying buffer may extend past the encoding (for example, with a terminator or further
/// records).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Vlpstr<'a> {
    prefix: Prefix,
    buf: &'a [u8],
    end: usize,
}

impl<'a> Vlpstr<'a> {
    /// Creates a view over `buf` using the default [Config].
    pub fn new(buf: &'a [u8]) -> Result<Self, Error> {
        Self::new_cfg(buf, &Config::default())
    }

    /// Creates a view over `buf`, decoding the prefix with `cfg`.
    ///
    /// Fails if `buf` is too short to hold the declared payload.
    pub fn new_cfg(buf: &'a [u8], cfg: &Config) -> Result<Self, Error> {
        let (prefix, end) = locate(buf, cfg)?;
        Ok(Self { prefix, buf, end })
    }

    /// The decoded prefix.
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    /// Logical length of the string.
    pub fn len(&self) -> usize {
        self.end - self.prefix.data_offset()
    }

    /// Returns true if the string is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the first payload byte.
    pub fn data_offset(&self) -> usize {
        self.prefix.data_offset()
    }

    /// The payload.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.prefix.data_offset()..self.end]
    }

    /// The prefix and payload, without any terminator.
    pub fn as_encoded(&self) -> &'a [u8] {
        &self.buf[..self.end]
    }

    /// Bytes following the payload (starting with the terminator, if present).
    pub fn remainder(&self) -> &'a [u8] {
        &self.buf[self.end..]
    }

    /// Returns true if the payload is followed by a terminator.
    pub fn has_terminator(&self) -> bool {
        self.buf.get(self.end) == Some(&0)
    }

    /// The payload as a terminated string.
    ///
    /// Returns `None` if no terminator follows the payload or the payload contains a zero byte.
    pub fn as_cstr(&self) -> Option<&'a CStr> {
        if !self.has_terminator() {
            return None;
        }
        CStr::from_bytes_with_nul(&self.buf[self.prefix.data_offset()..=self.end]).ok()
    }
}

impl Write for Vlpstr<'_> {
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(self.as_encoded());
    }
}

impl EncodeSize for Vlpstr<'_> {
    fn encode_size(&self) -> usize {
        self.end
    }
}

/// A validated, mutable view of an encoded string.
#[derive(Debug)]
pub struct VlpstrMut<'a> {
    prefix: Prefix,
    buf: &'a mut [u8],
    end: usize,
}

impl<'a> VlpstrMut<'a> {
    /// Creates a mutable view over `buf` using the default [Config].
    pub fn new(buf: &'a mut [u8]) -> Result<Self, Error> {
        Self::new_cfg(buf, &Config::default())
    }

    /// Creates a mutable view over `buf`, decoding the prefix with `cfg`.
    pub fn new_cfg(buf: &'a mut [u8], cfg: &Config) -> Result<Self, Error> {
        let (prefix, end) = locate(buf, cfg)?;
        Ok(Self { prefix, buf, end })
    }

    /// A read-only view of the same string.
    pub fn as_view(&self) -> Vlpstr<'_> {
        Vlpstr {
            prefix: self.prefix,
            buf: &*self.buf,
            end: self.end,
        }
    }

    /// Logical length of the string.
    pub fn len(&self) -> usize {
        self.end - self.prefix.data_offset()
    }

    /// Returns true if the string is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The payload, for in-place modification.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.prefix.data_offset()..self.end]
    }

    /// Shortens the string to `new_len` bytes without moving the payload.
    ///
    /// The length is rewritten with the current width. When the string shrinks, a terminator is
    /// written after the new end. Bytes past the current payload are never touched. Fails with
    /// [Error::InvalidLength] if `new_len` exceeds the current length.
    pub fn truncate(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len > self.len() {
            return Err(Error::InvalidLength(new_len as u64));
        }
        let prefix = match self.prefix.width() {
            0 => Prefix::minimal(new_len as u64),
            width => Prefix::fixed(new_len as u64, width)?,
        };

        let offset = prefix.data_offset();
        prefix.write(&mut &mut self.buf[..offset]);
        let end = offset + new_len;
        if end < self.end {
            self.buf[end] = 0;
        }
        self.prefix = prefix;
        self.end = end;
        Ok(())
    }
}
