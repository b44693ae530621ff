//! Encode strings with a variable-length size prefix.
//!
//! # Overview
//!
//! A compact binary encoding that stores the length of a string in a self-describing prefix
//! rather than relying on a terminator, while remaining byte-compatible with terminated strings:
//! - Strings shorter than 128 bytes carry a single byte of overhead (the same as a terminator)
//! - Longer strings carry up to 8 little-endian length bytes, addressing up to 64-bit lengths
//! - The payload may be followed by a terminator, so it can be handed to any API expecting one
//!
//! The empty string is a single `0x00` byte, identical to an empty terminated string.
//!
//! # Format
//!
//! ```text
//! Direct (length < 128):
//! +------+-----+-----+-----+-----+-----+-----+------+
//! | 0x06 | 'H' | 'e' | 'l' | 'l' | 'o' | '!' | 0x00 |
//! +------+-----+-----+-----+-----+-----+-----+------+
//!
//! Multibyte (here, a 2-byte length of 0x0351 = 849):
//! +------+------+------+-----+-----+-----+-----+------+
//! | 0x82 | 0x51 | 0x03 | 'A' | 'c' | ... | '!' | 0x00 |
//! +------+------+------+-----+-----+-----+-----+------+
//! ```
//!
//! The high bit of the flags byte selects the form. In the multibyte form, bits 0-3 hold the
//! number of length bytes and bits 4-6 are reserved. The trailing terminator is not counted in the
//! length and is not required by the format.
//!
//! Overlong encodings (more length bytes than necessary) are valid and decode to the same length.
//! The default encoder always writes the minimal one.
//!
//! # Memory
//!
//! Nothing is allocated: callers size storage with [rsize] and all operations work over borrowed
//! slices. Copying an encoded string is a plain byte copy. [rsize] saturates rather than
//! overflowing; [checked_rsize] is the exact variant and returns `None` when the size does not fit.
//!
//! # Example
//!
//! ```
//! use commonware_vlpstr::{data, import, len, rsize, Vlpstr};
//!
//! // Size and fill a buffer
//! let mut buf = [0u8; 8];
//! assert_eq!(rsize(6), buf.len());
//! import(&mut buf, c"Hello!").unwrap();
//! assert_eq!(&buf, b"\x06Hello!\0");
//!
//! // Read it back
//! assert_eq!(len(&buf).unwrap(), 6);
//! assert_eq!(data(&buf).unwrap(), 1);
//!
//! // Or validate once and work with a view
//! let view = Vlpstr::new(&buf).unwrap();
//! assert_eq!(view.as_bytes(), b"Hello!");
//! assert_eq!(view.as_cstr(), Some(c"Hello!"));
//! ```

pub mod codec;
pub mod config;
pub mod encoder;
pub mod error;
pub mod flags;
pub mod prefix;
pub mod util;
pub mod view;

// Re-export main types and traits
pub use codec::{Decode, EncodeSize, Read, ReadExt, Write};
pub use config::{Config, RangeCfg, Reserved};
pub use encoder::{import, import_bytes, Encoder, Width};
pub use error::Error;
pub use flags::Flags;
pub use prefix::{checked_rsize, prefix_size, rsize, Prefix};
pub use view::{data, data_cfg, len, len_cfg, Vlpstr, VlpstrMut};
