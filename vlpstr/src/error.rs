//! Error types for prefix codec operations

use thiserror::Error;

/// Error type for prefix codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("insufficient capacity: {0} < {1}")]
    InsufficientCapacity(usize, usize), // capacity, required
    #[error("malformed prefix 0x{0:02x}: {1}")]
    MalformedPrefix(u8, &'static str), // flags, reason
    #[error("integer overflow: {0}")]
    IntegerOverflow(u64),
    #[error("invalid length: {0}")]
    InvalidLength(u64),
    #[error("invalid width: {0} bytes cannot hold {1}")]
    InvalidWidth(u8, u64), // width, length
    #[error("missing terminator")]
    MissingTerminator,
}
